//! The discovery responder: answers the fixed `/json*` paths that
//! `chrome://inspect` queries when it looks for debuggable targets.
//!
//! Every request is handled from scratch. The caller's version is sniffed
//! into a local and the bodies are built for that version only, so a shared
//! responder never answers one caller with a payload built for another.

use std::sync::Arc;

use crate::frontend::{frontend_url_from, FRONTEND_BASE};
use crate::host::HostContext;
use crate::http::{status, Body, HttpHandler, Request, Response};
use crate::registry::HandlerRegistry;
use crate::sniff::caller_version;
use crate::types::*;

pub const PATH_PAGE_LIST: &str = "/json";
pub const PATH_PAGE_LIST1: &str = "/json/list";
pub const PATH_VERSION: &str = "/json/version";
pub const PATH_ACTIVATE: &str = "/json/activate/1";

/// All paths the responder answers.
pub const PATHS: [&str; 4] = [PATH_PAGE_LIST, PATH_PAGE_LIST1, PATH_VERSION, PATH_ACTIVATE];

/// Makes this process look like a debuggable target to `chrome://inspect`.
pub struct DiscoveryResponder {
    host: Arc<dyn HostContext>,
    inspector_path: String,
    frontend_base: &'static str,
}

impl DiscoveryResponder {
    pub fn new(host: Arc<dyn HostContext>, inspector_path: impl Into<String>) -> Self {
        Self {
            host,
            inspector_path: inspector_path.into(),
            frontend_base: FRONTEND_BASE,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_frontend_base(mut self, base: &'static str) -> Self {
        self.frontend_base = base;
        self
    }

    pub fn inspector_path(&self) -> &str {
        &self.inspector_path
    }

    /// Bind every discovery path in `registry` to this responder.
    pub fn register(self: &Arc<Self>, registry: &mut HandlerRegistry) {
        for path in PATHS {
            registry.register(path, self.clone());
        }
    }

    /// Answer one request.
    pub fn handle(&self, request: &Request) -> Response {
        let mut response = Response::default();
        self.respond(request, &mut response);
        response
    }

    fn respond(&self, request: &Request, response: &mut Response) {
        let path = request.path.as_str();
        let version = caller_version(request);

        let result = match path {
            PATH_VERSION => self.version_body().map(|body| response.ok(body)),
            PATH_PAGE_LIST | PATH_PAGE_LIST1 => {
                self.page_list_body(version).map(|body| response.ok(body))
            }
            PATH_ACTIVATE => {
                response.ok(Body::text("Target activation ignored\n"));
                Ok(())
            }
            _ => {
                response.set(
                    status::HTTP_NOT_IMPLEMENTED,
                    "Not implemented",
                    Body::text(format!("No support for {path}\n")),
                );
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::error!("Failed to build response for {path}: {e}");
            internal_error(response, &e);
        }
    }

    /// The `/json/version` payload.
    pub fn version_info(&self) -> VersionInfo {
        let meta = ProtocolMetadata::current();
        VersionInfo {
            webkit_version: meta.webkit_version,
            user_agent: meta.user_agent,
            protocol_version: meta.protocol_version,
            browser: format!("{}/{}", self.host.app_label(), self.host.app_version()),
            android_package: self.host.package_name().to_string(),
        }
    }

    /// The single target listed for a caller of `version`.
    pub fn page_descriptor(&self, version: CallerVersion) -> DiscoveryResult<PageDescriptor> {
        let frontend = frontend_url_from(self.frontend_base, version, &self.inspector_path)?;
        Ok(PageDescriptor {
            kind: "app".to_string(),
            title: self.make_title(),
            id: PAGE_ID.to_string(),
            description: String::new(),
            web_socket_debugger_url: format!("ws://{}", self.inspector_path),
            devtools_frontend_url: frontend.into(),
        })
    }

    fn version_body(&self) -> DiscoveryResult<Body> {
        Ok(Body::json(serde_json::to_vec(&self.version_info())?))
    }

    fn page_list_body(&self, version: CallerVersion) -> DiscoveryResult<Body> {
        let pages = [self.page_descriptor(version)?];
        Ok(Body::json(serde_json::to_vec(&pages)?))
    }

    /// Label plus the non-default part of the process name, if any.
    fn make_title(&self) -> String {
        let mut title = format!("{}{TITLE_SUFFIX}", self.host.app_label());
        let process_name = self.host.process_name();
        if let Some(colon) = process_name.find(':') {
            title.push_str(&process_name[colon..]);
        }
        title
    }
}

impl HttpHandler for DiscoveryResponder {
    fn handle_request(&self, request: &Request, response: &mut Response) -> bool {
        self.respond(request, response);
        true
    }
}

fn internal_error(response: &mut Response, error: &DiscoveryError) {
    response.set(
        status::HTTP_INTERNAL_SERVER_ERROR,
        "Internal server error",
        Body::text(format!("{error}\n")),
    );
}
