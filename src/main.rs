//! Dokploy Viewer - read-only Dokploy dashboard
//!
//! Usage:
//! - Normal mode: `dokploy-viewer`
//! - With custom port: `dokploy-viewer --port 8080`
//!
//! Configuration comes from the environment: `DOKPLOY_URL`,
//! `DOKPLOY_TOKEN`, `VIEWER_TOKEN`, `PORT`.

use tracing_subscriber::EnvFilter;

use dokploy_viewer::config::EnvConfig;

/// Parse command line arguments
fn parse_args() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    let mut port_override = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                port_override = args[i + 1].parse().ok();
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    port_override
}

fn print_help() {
    println!("Dokploy Viewer - read-only Dokploy dashboard");
    println!();
    println!("USAGE:");
    println!("    dokploy-viewer [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --port <PORT>    Override the listening port");
    println!("    -h, --help       Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    DOKPLOY_URL      Base URL of the Dokploy instance");
    println!("    DOKPLOY_TOKEN    Dokploy API token");
    println!("    VIEWER_TOKEN     Bearer token required by /api routes (empty = open)");
    println!("    PORT             Listening port (default 3000)");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port_override = parse_args();

    let mut config = EnvConfig::from_env();
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = dokploy_viewer::run(config).await {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
