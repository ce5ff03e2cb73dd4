use bytes::Bytes;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Upper bound, in octets, on the method and target fields of the
/// request-line.
pub const MAX_FIELD_OCTETS: usize = 8000;

/// Why a request could not be parsed.
///
/// Each variant renders as the diagnostic the terminal response carries,
/// and maps to a status code via [`ParseError::status`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("incorrectly formatted or missing request-line")]
    MalformedRequestLine,
    #[error("method exceeds {MAX_FIELD_OCTETS} octets")]
    MethodTooLong,
    #[error("request target exceeds {MAX_FIELD_OCTETS} octets")]
    TargetTooLong,
    #[error("end of input before terminating CRLF")]
    MissingCrlf,
    #[error("message header line does not end in LF")]
    MissingLineFeed,
    #[error("malformed message header line")]
    MalformedHeader,
    #[error("message line contains invalid bytes")]
    InvalidBytes,
    #[error("invalid Content-Length value")]
    InvalidContentLength,
    #[error("end of input before complete message body")]
    TruncatedBody,
    #[error("i/o error while reading request")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The status code of the terminal response for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::MethodTooLong => StatusCode::NotImplemented,
            ParseError::TargetTooLong => StatusCode::UriTooLong,
            _ => StatusCode::BadRequest,
        }
    }

    /// Renders the terminal response: status plus the diagnostic as a
    /// plain-text body.
    pub fn to_response(&self) -> Response {
        ResponseBuilder::new(self.status())
            .header("Content-Type", "text/plain")
            .body(self.to_string())
            .build()
    }
}

/// Parses exactly one request from a buffered byte source.
///
/// The outcome is either a valid [`Request`] or a [`ParseError`] that
/// renders a terminal response — never both.
pub async fn parse_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = read_crlf_line(reader).await?;

    let fields: Vec<&str> = request_line.split(' ').collect();
    if fields.len() != 3 || fields.iter().any(|f| f.is_empty()) {
        return Err(ParseError::MalformedRequestLine);
    }
    let (method, target, version) = (fields[0], fields[1], fields[2]);

    if method.len() > MAX_FIELD_OCTETS {
        return Err(ParseError::MethodTooLong);
    }
    if target.len() > MAX_FIELD_OCTETS {
        return Err(ParseError::TargetTooLong);
    }

    let mut headers = Vec::new();
    loop {
        let line = read_crlf_line(reader).await?;
        if line.is_empty() {
            break;
        }

        let (name, value) = line.split_once(':').ok_or(ParseError::MalformedHeader)?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let content_length = match headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case("Content-Length"))
    {
        Some((_, v)) => v
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidContentLength)?,
        None => 0,
    };

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                ParseError::TruncatedBody
            } else {
                ParseError::Io(e)
            }
        })?;
    }

    Ok(Request::new(
        method.to_string(),
        target.to_string(),
        version.to_string(),
        headers,
        Bytes::from(body),
    ))
}

/// Reads one CRLF-terminated line, returned without the terminator.
///
/// Reads up to the CR, then requires the very next byte to be LF.
async fn read_crlf_line<R>(reader: &mut R) -> Result<String, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    let n = reader.read_until(b'\r', &mut line).await?;
    if n == 0 || line.last() != Some(&b'\r') {
        // Stream ended before any CR arrived.
        return Err(ParseError::MissingCrlf);
    }
    line.pop();

    let mut lf = [0u8; 1];
    match reader.read_exact(&mut lf).await {
        Ok(_) if lf[0] == b'\n' => {}
        Ok(_) => return Err(ParseError::MissingLineFeed),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(ParseError::MissingLineFeed);
        }
        Err(e) => return Err(ParseError::Io(e)),
    }

    String::from_utf8(line).map_err(|_| ParseError::InvalidBytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn parse_simple_get() {
        let raw: &[u8] = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let mut reader = BufReader::new(raw);

        let parsed = parse_request(&mut reader).await.unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.header("Host").unwrap(), "example.com");
    }
}
