//! Core data types for the discovery handshake.

use serde::{Deserialize, Serialize};

/// Identifier of the single inspectable target.
pub const PAGE_ID: &str = "1";

/// Pinned revision of the inspector front-end we serve to current callers.
pub const WEBKIT_REV: &str = "@81b36b9535e3e3b610a52df3da48cd81362ec860";

/// Front-end bundle that callers up to major version 89 still expect.
pub const LEGACY_FRONTEND_REV: &str = "@188492";

/// Structured version of the inspector protocol that we understand.
pub const PROTOCOL_VERSION: &str = "1.3";

/// Identity we report as our own `User-Agent` in `/json/version`.
pub const USER_AGENT: &str = "Stetho";

/// Suffix appended to the host label in the page title.
pub const TITLE_SUFFIX: &str = " (powered by Stetho)";

/// Static protocol metadata advertised by the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMetadata {
    pub protocol_version: String,
    pub frontend_revision: String,
    pub user_agent: String,
    pub webkit_version: String,
}

impl ProtocolMetadata {
    pub fn current() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            frontend_revision: WEBKIT_REV.to_string(),
            user_agent: USER_AGENT.to_string(),
            webkit_version: format!("537.36 ({WEBKIT_REV})"),
        }
    }
}

/// Body of `/json/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "WebKit-Version")]
    pub webkit_version: String,
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
    #[serde(rename = "Protocol-Version")]
    pub protocol_version: String,
    #[serde(rename = "Browser")]
    pub browser: String,
    #[serde(rename = "Android-Package")]
    pub android_package: String,
}

/// The one inspectable target listed by `/json` and `/json/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub id: String,
    pub description: String,
    pub web_socket_debugger_url: String,
    pub devtools_frontend_url: String,
}

/// Major version of the calling client, sniffed from its `User-Agent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallerVersion(u32);

impl CallerVersion {
    /// Used whenever the caller's version can't be determined. High enough to
    /// select the newest front-end branch.
    pub const DEFAULT: CallerVersion = CallerVersion(99);

    /// Last major version that still loads the legacy front-end bundle.
    pub const LAST_LEGACY: u32 = 89;

    pub fn new(major: u32) -> Self {
        Self(major)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this caller needs the legacy `devtools.html` front-end.
    pub fn uses_legacy_frontend(self) -> bool {
        (1..=Self::LAST_LEGACY).contains(&self.0)
    }
}

impl Default for CallerVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for CallerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while building a discovery payload.
#[derive(thiserror::Error, Debug)]
pub enum DiscoveryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Front-end URL error: {0}")]
    FrontendUrl(String),
}

/// Convenience result type.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_boundaries() {
        assert!(!CallerVersion::new(0).uses_legacy_frontend());
        assert!(CallerVersion::new(1).uses_legacy_frontend());
        assert!(CallerVersion::new(89).uses_legacy_frontend());
        assert!(!CallerVersion::new(90).uses_legacy_frontend());
        assert!(!CallerVersion::DEFAULT.uses_legacy_frontend());
    }

    #[test]
    fn test_webkit_version_embeds_revision() {
        let meta = ProtocolMetadata::current();
        assert_eq!(
            meta.webkit_version,
            "537.36 (@81b36b9535e3e3b610a52df3da48cd81362ec860)"
        );
        assert!(meta.webkit_version.contains(&meta.frontend_revision));
    }

    #[test]
    fn test_page_descriptor_field_names() {
        let page = PageDescriptor {
            kind: "app".to_string(),
            title: "t".to_string(),
            id: PAGE_ID.to_string(),
            description: String::new(),
            web_socket_debugger_url: "ws://x".to_string(),
            devtools_frontend_url: "http://y".to_string(),
        };
        let value = serde_json::to_value(&page).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["type"], "app");
        assert!(obj.contains_key("webSocketDebuggerUrl"));
        assert!(obj.contains_key("devtoolsFrontendUrl"));
        assert_eq!(obj.len(), 6);
    }
}
