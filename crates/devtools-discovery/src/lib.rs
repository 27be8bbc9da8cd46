//! devtools-discovery — answers the `chrome://inspect` discovery handshake for an embedded debug target.

pub mod frontend;
pub mod host;
pub mod http;
pub mod registry;
pub mod responder;
pub mod sniff;
pub mod types;

pub use frontend::frontend_url;
pub use host::{HostContext, StaticHost};
pub use http::{Body, HttpHandler, Request, Response};
pub use registry::HandlerRegistry;
pub use responder::{DiscoveryResponder, PATHS};
pub use sniff::{caller_version, parse_user_agent};
pub use types::*;
