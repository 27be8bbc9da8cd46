//! devtools-discovery server — exposes a debug target to `chrome://inspect` over HTTP.

pub mod config;
pub mod transport;
pub mod types;

pub use config::{resolve_host, resolve_inspector_path, HostOverrides};
pub use transport::HttpTransport;
