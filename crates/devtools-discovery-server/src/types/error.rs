//! Error types for the discovery server.

/// Host configuration that cannot identify the debug target.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Package identifier is empty; set --package or DEVTOOLS_PACKAGE")]
    MissingPackage,

    #[error("Application version is empty; set --app-version or DEVTOOLS_APP_VERSION")]
    MissingVersion,

    #[error("Cannot determine executable name: {0}")]
    Io(#[from] std::io::Error),
}

/// All errors that can occur while serving.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
