//! devtools-discovery — entry point.

use std::sync::Arc;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use devtools_discovery::{DiscoveryResponder, Request, StaticHost};
use devtools_discovery_server::config::{resolve_host, resolve_inspector_path, HostOverrides};
use devtools_discovery_server::transport::HttpTransport;
use devtools_discovery_server::types::ServerInfo;

const DEFAULT_ADDR: &str = "127.0.0.1:9222";

#[derive(Parser)]
#[command(
    name = "devtools-discovery",
    about = "Make a debug target discoverable from chrome://inspect",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Host identity and inspector location.
#[derive(Args, Clone, Default)]
struct TargetArgs {
    /// Listen address (host:port).
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Inspector path advertised in the WebSocket URL. Defaults to {addr}/inspector.
    #[arg(long)]
    inspector_path: Option<String>,

    /// Application display name.
    #[arg(long)]
    app_label: Option<String>,

    /// Application version string.
    #[arg(long)]
    app_version: Option<String>,

    /// Package or bundle identifier.
    #[arg(long)]
    package: Option<String>,

    /// Process name; a `:suffix` is shown in the target title.
    #[arg(long)]
    process_name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the discovery endpoint over HTTP (default).
    Serve {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print protocol and host metadata as JSON.
    Info {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Answer one request in-process and print the response.
    ///
    /// Examples:
    ///   devtools-discovery request /json --user-agent "Chrome/89.0.4389.90"
    ///   devtools-discovery request /json/version
    Request {
        /// Request path, e.g. /json/list.
        path: String,

        /// User-Agent header to send.
        #[arg(long)]
        user_agent: Option<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

impl TargetArgs {
    fn build(&self) -> anyhow::Result<(StaticHost, Arc<DiscoveryResponder>)> {
        let host = resolve_host(HostOverrides {
            app_label: self.app_label.clone(),
            app_version: self.app_version.clone(),
            package: self.package.clone(),
            process_name: self.process_name.clone(),
        })?;
        let inspector_path = resolve_inspector_path(self.inspector_path.as_deref(), &self.addr);
        let responder = DiscoveryResponder::new(Arc::new(host.clone()), inspector_path);
        Ok((host, Arc::new(responder)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        target: TargetArgs {
            addr: DEFAULT_ADDR.to_string(),
            ..Default::default()
        },
    }) {
        Commands::Serve { target } => {
            let (host, responder) = target.build()?;
            tracing::info!("Target: {} ({})", host.app_label, host.package_name);
            tracing::info!("Inspector: ws://{}", responder.inspector_path());
            let transport = HttpTransport::new(responder);
            transport.run(&target.addr).await?;
        }

        Commands::Info { target } => {
            let (host, responder) = target.build()?;
            let info = ServerInfo::describe(&host, &responder);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Request {
            path,
            user_agent,
            target,
        } => {
            let (_, responder) = target.build()?;
            let mut request = Request::from_uri(&path);
            if let Some(ua) = user_agent {
                request = request.with_header("User-Agent", ua);
            }
            let response = responder.handle(&request);
            println!("{} {}", response.code, response.reason_phrase);
            println!("Content-Type: {}", response.body.content_type);
            println!();
            print!("{}", response.body.as_text());
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "devtools-discovery",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
