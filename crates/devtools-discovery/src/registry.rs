//! Exact-path handler registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::http::{status, Body, HttpHandler, Request, Response};

/// Routes requests to handlers by exact path match.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, Arc<dyn HttpHandler>>,
    fallback: Option<Arc<dyn HttpHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `path` to `handler`. Binding the same path again replaces it.
    pub fn register(&mut self, path: &str, handler: Arc<dyn HttpHandler>) {
        if self.handlers.insert(path.to_string(), handler).is_some() {
            tracing::debug!("Replaced handler for {path}");
        }
    }

    /// Handler used when no exact path matches.
    pub fn with_fallback(mut self, handler: Arc<dyn HttpHandler>) -> Self {
        self.fallback = Some(handler);
        self
    }

    pub fn lookup(&self, path: &str) -> Option<&Arc<dyn HttpHandler>> {
        self.handlers.get(path)
    }

    /// Registered paths in sorted order.
    pub fn paths(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Route one request and return the response produced for it.
    pub fn dispatch(&self, request: &Request) -> Response {
        let mut response = Response::default();

        let handler = self.lookup(&request.path).or(self.fallback.as_ref());
        let handled = handler.is_some_and(|h| h.handle_request(request, &mut response));

        if !handled {
            response.set(
                status::HTTP_NOT_FOUND,
                "Not found",
                Body::text("No handler found\n"),
            );
        }
        response
    }
}
