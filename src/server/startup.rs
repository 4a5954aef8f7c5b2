use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::error::AppError;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "gatekeeper=info,serenity=warn";

/// Timeout applied to every avatar download.
const AVATAR_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set and otherwise logs this crate at info level while
/// keeping serenity's gateway chatter at warn.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client used to download member avatars.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with a request timeout and identifying user agent
/// - `Err(AppError::ReqwestErr)` - The TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(AVATAR_REQUEST_TIMEOUT)
        .user_agent(concat!("gatekeeper/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Resolves once the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        }
    }
}
