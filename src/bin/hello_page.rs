//! Hello World page server entry point.

use clap::Parser;
use tracing::{error, info};

use demo_servers::page::{create_router, PageState, LISTEN_ADDR};
use demo_servers::utils::{bind, init_tracing, serve};

/// Hello World page server.
#[derive(Parser, Debug)]
#[command(name = "hello-page")]
#[command(about = "Serves an animated Hello World page and a health check on port 8080")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, None);

    info!("🚀 Server starting on port 8080...");
    info!("🌐 Visit: http://localhost:8080");

    let listener = bind(LISTEN_ADDR).await.map_err(|e| {
        error!("Server failed to start: {}", e);
        e
    })?;

    serve(listener, create_router(PageState::new())).await?;
    Ok(())
}
