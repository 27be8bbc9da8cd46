//! Minimal request/response shapes exchanged with the transport.
//!
//! The transport owns sockets and framing. It hands the core a parsed
//! [`Request`] and serializes whatever [`Response`] comes back.

/// Status codes produced by the core.
pub mod status {
    pub const HTTP_OK: u16 = 200;
    pub const HTTP_NOT_FOUND: u16 = 404;
    pub const HTTP_INTERNAL_SERVER_ERROR: u16 = 500;
    pub const HTTP_NOT_IMPLEMENTED: u16 = 501;
}

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

/// A parsed incoming request. Read-only for handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: Vec::new(),
        }
    }

    /// Build a request from a raw request target, dropping query and fragment.
    pub fn from_uri(uri: &str) -> Self {
        let end = uri.find(['?', '#']).unwrap_or(uri.len());
        Self::new(&uri[..end])
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First value of `name`, compared case-insensitively.
    pub fn first_header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub content: Vec<u8>,
    pub content_type: String,
}

impl Body {
    pub fn create(content: impl Into<Vec<u8>>, content_type: &str) -> Self {
        Self {
            content: content.into(),
            content_type: content_type.to_string(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::create(content.into(), TEXT_PLAIN)
    }

    pub fn json(content: Vec<u8>) -> Self {
        Self::create(content, APPLICATION_JSON)
    }

    /// Content as UTF-8 text, lossy.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// A response slot. Always fully populated; the default is a 500 so a
/// handler that forgets to write still yields something sendable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u16,
    pub reason_phrase: String,
    pub body: Body,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            code: status::HTTP_INTERNAL_SERVER_ERROR,
            reason_phrase: "Internal server error".to_string(),
            body: Body::text(""),
        }
    }
}

impl Response {
    pub fn set(&mut self, code: u16, reason_phrase: &str, body: Body) {
        self.code = code;
        self.reason_phrase = reason_phrase.to_string();
        self.body = body;
    }

    pub fn ok(&mut self, body: Body) {
        self.set(status::HTTP_OK, "OK", body);
    }
}

/// Something the transport can route a request to.
pub trait HttpHandler: Send + Sync {
    /// Fill `response` for `request`. Returns `true` when the request was
    /// handled and no further routing should happen.
    fn handle_request(&self, request: &Request, response: &mut Response) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_case_insensitive() {
        let req = Request::new("/json").with_header("user-agent", "a");
        assert_eq!(req.first_header_value("User-Agent"), Some("a"));
        assert_eq!(req.first_header_value("USER-AGENT"), Some("a"));
        assert_eq!(req.first_header_value("Accept"), None);
    }

    #[test]
    fn test_header_lookup_first_match_wins() {
        let req = Request::new("/json")
            .with_header("User-Agent", "first")
            .with_header("user-agent", "second");
        assert_eq!(req.first_header_value("user-agent"), Some("first"));
    }

    #[test]
    fn test_from_uri_strips_query_and_fragment() {
        assert_eq!(Request::from_uri("/json/version?x=1").path, "/json/version");
        assert_eq!(Request::from_uri("/json#frag").path, "/json");
        assert_eq!(Request::from_uri("/json/list").path, "/json/list");
    }

    #[test]
    fn test_default_response_is_populated() {
        let resp = Response::default();
        assert_eq!(resp.code, status::HTTP_INTERNAL_SERVER_ERROR);
        assert!(!resp.reason_phrase.is_empty());
        assert_eq!(resp.body.content_type, TEXT_PLAIN);
    }
}
