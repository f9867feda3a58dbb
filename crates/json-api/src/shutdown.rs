//! Shutdown

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use tokio::signal;
use tracing::info;

/// Signal that asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopSignal {
    Interrupt,
    Terminate,
}

#[cfg(unix)]
async fn terminated() -> io::Result<()> {
    signal::unix::signal(signal::unix::SignalKind::terminate())?
        .recv()
        .await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminated() -> io::Result<()> {
    std::future::pending().await
}

async fn stop_signal() -> io::Result<StopSignal> {
    tokio::select! {
        result = signal::ctrl_c() => result.map(|()| StopSignal::Interrupt),
        result = terminated() => result.map(|()| StopSignal::Terminate),
    }
}

/// Wait for Ctrl+C or SIGTERM, then give in-flight requests `grace` to
/// finish before the server stops.
///
/// # Errors
///
/// Returns an error when a signal handler cannot be installed.
pub(crate) async fn listen(handle: ServerHandle, grace: Duration) -> io::Result<()> {
    let signal = stop_signal().await?;

    info!(?signal, grace_secs = grace.as_secs(), "shutting down");

    handle.stop_graceful(grace);

    Ok(())
}
