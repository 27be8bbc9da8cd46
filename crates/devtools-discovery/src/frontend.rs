//! Inspector front-end URL selection.

use url::Url;

use crate::types::{CallerVersion, DiscoveryError, DiscoveryResult, LEGACY_FRONTEND_REV, WEBKIT_REV};

pub const FRONTEND_BASE: &str = "http://chrome-devtools-frontend.appspot.com";

/// Build the `devtoolsFrontendUrl` for a caller.
///
/// Callers up to major version 89 get the legacy `devtools.html` bundle; every
/// other caller, including the unknown-version default, gets the pinned
/// `inspector.html` revision.
pub fn frontend_url(version: CallerVersion, inspector_path: &str) -> DiscoveryResult<Url> {
    frontend_url_from(FRONTEND_BASE, version, inspector_path)
}

pub(crate) fn frontend_url_from(
    base: &str,
    version: CallerVersion,
    inspector_path: &str,
) -> DiscoveryResult<Url> {
    let (revision, page) = if version.uses_legacy_frontend() {
        tracing::debug!("Using devtools.html for Chrome {version}");
        (LEGACY_FRONTEND_REV, "devtools.html")
    } else {
        (WEBKIT_REV, "inspector.html")
    };

    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| DiscoveryError::FrontendUrl(format!("{base} cannot be a base")))?
        .clear()
        .extend(["serve_rev", revision, page]);
    url.query_pairs_mut().append_pair("ws", inspector_path);
    Ok(url)
}
