use bytes::Bytes;

/// One query parameter from the request target, in the order it appeared.
///
/// A parameter without `=` has no value; `name=` has an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub value: Option<String>,
}

/// Represents a parsed HTTP request from a client.
///
/// Immutable once parsed. `target` is the raw request target; `path` is the
/// part before any `?`, so `path` is always a prefix of `target`. Headers
/// keep their wire order and duplicates, which the dispatch layer relies on
/// to detect ambiguous `Range` and `If-Match` values.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method as it appeared on the wire (e.g. "GET")
    pub method: String,
    /// The raw request target, including any query string
    pub target: String,
    /// The target up to (excluding) the first `?`
    pub path: String,
    /// Query parameters in wire order
    pub query: Vec<QueryParam>,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Headers in wire order, duplicates preserved
    headers: Vec<(String, String)>,
    /// Request body for PUT/PATCH/POST requests
    pub body: Bytes,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<String>,
    target: Option<String>,
    version: Option<String>,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl Request {
    pub(crate) fn new(
        method: String,
        target: String,
        version: String,
        headers: Vec<(String, String)>,
        body: Bytes,
    ) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, raw_query)) => (path.to_string(), parse_query(raw_query)),
            None => (target.clone(), Vec::new()),
        };

        Self {
            method,
            target,
            path,
            query,
            version,
            headers,
            body,
        }
    }

    /// Retrieves the first value of a header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Every value carried under `name`, in wire order.
    ///
    /// Callers that must reject ambiguous headers (`Range`, `If-Match`)
    /// check the length of this.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// All headers in wire order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

fn parse_query(raw: &str) -> Vec<QueryParam> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => QueryParam {
                name: name.to_string(),
                value: Some(value.to_string()),
            },
            None => QueryParam {
                name: pair.to_string(),
                value: None,
            },
        })
        .collect()
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Appends a header; calling twice with the same name keeps both.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request::new(
            self.method.ok_or("method missing")?,
            self.target.ok_or("target missing")?,
            self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            self.headers,
            self.body,
        ))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
