//! Server plumbing shared by both binaries.

use chrono::{Local, SecondsFormat};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ServerError};

/// Initialize the global tracing subscriber.
///
/// `verbose` wins over everything; otherwise `level` is used when given, then
/// `RUST_LOG`, then `info`.
pub fn init_tracing(verbose: bool, level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("demo_servers=debug,tower_http=debug,info")
    } else {
        let parsed = match level {
            Some(level) => EnvFilter::try_new(level).ok(),
            None => EnvFilter::try_from_default_env().ok(),
        };
        parsed.unwrap_or_else(|| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Current local time as RFC 3339, second precision.
pub fn rfc3339_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Bind a TCP listener, mapping failures to [`ServerError::Bind`].
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve `router` on `listener` until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, router: axum::Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
