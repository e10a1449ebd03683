//! Hashtag Proxy Server
//!
//! Runs the dashboard backend as a standalone HTTP server.

use anyhow::Result;
use clap::Parser;
use hashtag_proxy::config::DEFAULT_UPSTREAM_BASE_URL;
use hashtag_proxy::{run_server, ProxyConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hashtag-proxy-server")]
#[command(about = "Instagram hashtag lookup proxy and dashboard backend")]
struct Args {
    /// Server port
    #[arg(short, long, default_value = "3000", env = "PROXY_PORT")]
    port: u16,

    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "PROXY_HOST")]
    host: String,

    /// RapidAPI key for the Instagram scraping API
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    rapidapi_key: Option<String>,

    /// Base URL of the Instagram scraping API
    #[arg(long, default_value = DEFAULT_UPSTREAM_BASE_URL, env = "RAPIDAPI_BASE_URL")]
    upstream_base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hashtag_proxy=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("Starting Hashtag Proxy Server");
    info!("  Listening on: {}:{}", args.host, args.port);

    let config = ProxyConfig {
        host: args.host,
        port: args.port,
        rapidapi_key: args.rapidapi_key,
        upstream_base_url: args.upstream_base_url,
    };

    run_server(config).await
}
