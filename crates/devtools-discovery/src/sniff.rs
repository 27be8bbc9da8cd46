//! Caller version sniffing from the `User-Agent` header.

use std::sync::OnceLock;

use regex::Regex;

use crate::http::Request;
use crate::types::CallerVersion;

fn chrome_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Chrome/([0-9]+)\.").expect("chrome version regex is valid"))
}

/// Sniff the caller's major version from the request headers.
pub fn caller_version(request: &Request) -> CallerVersion {
    match request.first_header_value("User-Agent") {
        Some(user_agent) if !user_agent.is_empty() => parse_user_agent(user_agent),
        _ => CallerVersion::DEFAULT,
    }
}

/// Extract the major version from the first `Chrome/<digits>.` in `user_agent`.
pub fn parse_user_agent(user_agent: &str) -> CallerVersion {
    let Some(digits) = chrome_pattern()
        .captures(user_agent)
        .and_then(|c| c.get(1))
    else {
        return CallerVersion::DEFAULT;
    };

    match digits.as_str().parse::<u32>() {
        Ok(major) => {
            tracing::debug!("Detected Chrome version: {major}");
            CallerVersion::new(major)
        }
        Err(e) => {
            tracing::warn!("Failed to parse Chrome version from {user_agent:?}: {e}");
            CallerVersion::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_89() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/89.0.4389.90 Safari/537.36";
        assert_eq!(parse_user_agent(ua).get(), 89);
    }

    #[test]
    fn test_chrome_90() {
        assert_eq!(parse_user_agent("x Chrome/90.0.1234.1 y").get(), 90);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(parse_user_agent("Chrome/70.1 Chrome/120.0").get(), 70);
    }

    #[test]
    fn test_requires_trailing_dot() {
        assert_eq!(parse_user_agent("Chrome/120"), CallerVersion::DEFAULT);
        assert_eq!(parse_user_agent("Chrome/.1"), CallerVersion::DEFAULT);
    }

    #[test]
    fn test_no_match_defaults() {
        assert_eq!(parse_user_agent("curl/8.4.0"), CallerVersion::DEFAULT);
    }

    #[test]
    fn test_overflow_defaults() {
        assert_eq!(
            parse_user_agent("Chrome/99999999999999999999.0"),
            CallerVersion::DEFAULT
        );
    }

    #[test]
    fn test_zero_is_kept() {
        assert_eq!(parse_user_agent("Chrome/0.1").get(), 0);
    }

    #[test]
    fn test_missing_or_empty_header() {
        assert_eq!(caller_version(&Request::new("/json")), CallerVersion::DEFAULT);
        let empty = Request::new("/json").with_header("User-Agent", "");
        assert_eq!(caller_version(&empty), CallerVersion::DEFAULT);
    }

    #[test]
    fn test_header_name_case_insensitive() {
        let req = Request::new("/json").with_header("user-agent", "Chrome/88.0.1");
        assert_eq!(caller_version(&req).get(), 88);
    }
}
