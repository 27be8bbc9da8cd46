//! Server description printed by `devtools-discovery info`.

use serde::{Deserialize, Serialize};

use devtools_discovery::{DiscoveryResponder, ProtocolMetadata, StaticHost};

pub const SERVER_NAME: &str = "devtools-discovery";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub protocol: ProtocolMetadata,
    pub host: StaticHost,
    pub inspector_path: String,
    pub web_socket_debugger_url: String,
    pub paths: Vec<String>,
}

impl ServerInfo {
    pub fn describe(host: &StaticHost, responder: &DiscoveryResponder) -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            protocol: ProtocolMetadata::current(),
            host: host.clone(),
            inspector_path: responder.inspector_path().to_string(),
            web_socket_debugger_url: format!("ws://{}", responder.inspector_path()),
            paths: devtools_discovery::PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}
