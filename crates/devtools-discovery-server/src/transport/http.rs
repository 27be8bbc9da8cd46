//! HTTP transport — serves the discovery paths over TCP with axum.
//!
//! Every method and path goes through one fallback route into the
//! [`HandlerRegistry`], so routing stays exact-path and unknown paths reach
//! the responder's own 501 answer.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};

use devtools_discovery::{DiscoveryResponder, HandlerRegistry};

use crate::types::{ServerError, ServerResult};

/// HTTP transport for `chrome://inspect` and other discovery clients.
pub struct HttpTransport {
    registry: Arc<HandlerRegistry>,
}

impl HttpTransport {
    /// Create a transport that routes everything to `responder`.
    pub fn new(responder: Arc<DiscoveryResponder>) -> Self {
        let mut registry = HandlerRegistry::new();
        responder.register(&mut registry);
        Self::with_registry(registry.with_fallback(responder))
    }

    pub fn with_registry(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Build the axum router. Exposed so tests can drive it in-process.
    pub fn router(&self) -> Router {
        Router::new()
            .fallback(handle_request)
            .with_state(self.registry.clone())
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> ServerResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServerError::Io)?;

        tracing::info!("Discovery endpoint listening on http://{addr}/json");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Convert an axum request into the responder's request shape.
pub fn to_discovery_request(request: &Request) -> devtools_discovery::Request {
    let mut converted = devtools_discovery::Request::new(request.uri().path());
    for (name, value) in request.headers() {
        match std::str::from_utf8(value.as_bytes()) {
            Ok(value) => converted.headers.push((name.as_str().to_string(), value.to_string())),
            Err(_) => tracing::debug!("Skipping non-UTF-8 header {name}"),
        }
    }
    converted
}

/// Convert the responder's answer into an axum response.
pub fn to_http_response(response: devtools_discovery::Response) -> Response {
    let status =
        StatusCode::from_u16(response.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, response.body.content_type)],
        response.body.content,
    )
        .into_response()
}

async fn handle_request(
    State(registry): State<Arc<HandlerRegistry>>,
    request: Request,
) -> Response {
    let converted = to_discovery_request(&request);
    let response = registry.dispatch(&converted);

    tracing::debug!(
        method = %request.method(),
        path = %converted.path,
        code = response.code,
        reason = %response.reason_phrase,
        "Discovery request"
    );

    to_http_response(response)
}
