//! Go App API server entry point.

use clap::Parser;
use tracing::{error, info};

use demo_servers::api::create_router;
use demo_servers::config::Config;
use demo_servers::utils::{bind, init_tracing, serve};

/// Go App API server.
#[derive(Parser, Debug)]
#[command(name = "go-app")]
#[command(about = "Static JSON API with health, info and metrics endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Configuration carries the log level, so load it first
    let config = Config::load();
    init_tracing(
        args.verbose,
        config.as_ref().ok().map(|c| c.rust_log.as_str()),
    );

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let addr = config.listen_addr();
    let listener = bind(&addr).await.map_err(|e| {
        error!("Server failed to start: {}", e);
        e
    })?;
    info!("Go App listening on {}", addr);

    serve(listener, create_router()).await?;
    Ok(())
}
