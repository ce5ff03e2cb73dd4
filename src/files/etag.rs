use sha1::{Digest, Sha1};

/// SHA-1 hex digest of `bytes`: the content fingerprint behind `ETag` and
/// `If-Match`. Computed on demand, never cached.
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let digest = hasher.finalize();

    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// The digest in the quoted form it travels in on the wire.
pub fn quoted(digest: &str) -> String {
    format!("\"{}\"", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_lowercase_sha1_hex() {
        assert_eq!(
            content_digest(b"ABC"),
            "3c01bdbb26f358bab27f267924aa2c9a03fcfdb8"
        );
    }

    #[test]
    fn quoted_wraps_in_double_quotes() {
        assert_eq!(quoted("abc123"), "\"abc123\"");
    }
}
