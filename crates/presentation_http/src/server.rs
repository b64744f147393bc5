//! Server loop with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    io,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// All connections closed before the drain timeout
    Drained,
    /// Connections were still open when the drain timeout elapsed
    TimedOut,
}

/// Serve `app` until `shutdown` resolves, then wait at most `drain_timeout`
/// for in-flight connections to finish.
///
/// # Errors
///
/// Returns the server's I/O error if serving fails.
pub async fn serve<S>(
    listener: TcpListener,
    app: Router,
    shutdown: S,
    drain_timeout: Duration,
) -> io::Result<ShutdownOutcome>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result?;
            return Ok(ShutdownOutcome::Drained);
        }
        Ok(()) = signalled_rx => {}
    }

    info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(result) => {
            result?;
            Ok(ShutdownOutcome::Drained)
        },
        Err(_) => {
            warn!(
                timeout_secs = drain_timeout.as_secs_f64(),
                "Shutdown timeout elapsed, dropping open connections"
            );
            Ok(ShutdownOutcome::TimedOut)
        },
    }
}
