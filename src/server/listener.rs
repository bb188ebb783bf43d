use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{Instrument, debug, error, info, info_span};

use crate::handler::HandlerTable;
use crate::http::connection::Connection;

/// Pause after a failed accept, e.g. when out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

/// Accepts forever, one task per connection.
///
/// With a `limiter`, a permit is taken before each accept and released when
/// the connection task ends, so pending clients wait in the kernel backlog.
pub async fn run(
    listener: TcpListener,
    handlers: Arc<HandlerTable>,
    limiter: Option<Arc<Semaphore>>,
) -> anyhow::Result<()> {
    loop {
        let permit = match &limiter {
            Some(sem) => Some(Arc::clone(sem).acquire_owned().await?),
            None => None,
        };

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                // Per-connection failures (e.g. aborted handshakes) must not stop the loop.
                error!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let handlers = Arc::clone(&handlers);
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, handlers);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
                debug!("Connection closed");
                drop(permit);
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
