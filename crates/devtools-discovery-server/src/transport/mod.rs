//! Transport layer that carries discovery requests to the responder.

pub mod http;

pub use http::HttpTransport;
