use std::path::Path;

/// Maps a file extension to its registered MIME type.
///
/// Unregistered or absent extensions fall back to `text/plain`.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "wasm" => "application/wasm",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn known_extension() {
        assert_eq!(from_path(&PathBuf::from("index.html")), "text/html");
        assert_eq!(from_path(&PathBuf::from("logo.PNG")), "image/png");
    }

    #[test]
    fn unknown_or_missing_extension_defaults_to_plain_text() {
        assert_eq!(from_path(&PathBuf::from("data.xyz")), "text/plain");
        assert_eq!(from_path(&PathBuf::from("README")), "text/plain");
    }
}
