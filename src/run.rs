//! Application execution logic.
//!
//! This module contains the main async execution loop that polls the
//! router and logs devices joining or leaving the network.

use thiserror::Error;
use tokio::signal;
use tokio_stream::StreamExt;

use netgear_presence::config::ValidatedConfig;
use netgear_presence::monitor::{ChangedDevice, DeviceChange, PollingMonitor};
use netgear_presence::router::RouterClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Unexpected stream termination.
    #[error("Monitor stream terminated unexpectedly")]
    StreamTerminated,
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the router client from the configuration
/// 2. Starts polling the router for attached devices
/// 3. Logs every device change and every failed poll
/// 4. Runs until a shutdown signal (Ctrl+C / SIGTERM)
///
/// # Errors
///
/// Returns an error if the monitor stream terminates unexpectedly.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires:
/// - A reachable router
/// - Real async runtime with signal handling
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = create_client(&config);

    tracing::info!(
        "Polling {} every {}s",
        config.endpoint,
        config.poll_interval.as_secs()
    );

    let mut stream = PollingMonitor::new(client, config.poll_interval).into_stream();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                stream.stop();
                return Ok(());
            }

            event = stream.next() => {
                match event {
                    Some(Ok(change)) => tracing::info!("{}", change_message(&change)),
                    Some(Err(e)) => tracing::warn!("Poll failed: {e}"),
                    None => return Err(RunError::StreamTerminated),
                }
            }
        }
    }
}

/// Creates the router client from configuration.
fn create_client(config: &ValidatedConfig) -> RouterClient {
    RouterClient::new(&config.host, &config.username, &config.password)
        .with_port(config.port)
        .with_session_id(&config.session_id)
}

/// Formats the log line for a device change.
fn change_message(change: &ChangedDevice) -> String {
    match change.change {
        DeviceChange::Added => format!("New device added: {}", change.device),
        DeviceChange::Removed => format!("Device removed: {}", change.device),
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
