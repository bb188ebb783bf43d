//! Listening socket and method dispatch.
//!
//! Handlers are registered on a [`Server`] before it starts. `start`
//! consumes the server, so the handler table is frozen from the first
//! accepted connection on and can be shared without locks.

pub mod listener;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::info;

use crate::handler::{Handler, HandlerTable};

pub struct Server {
    listener: TcpListener,
    handlers: HandlerTable,
    max_connections: Option<usize>,
}

impl Server {
    pub async fn bind(addr: impl ToSocketAddrs) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            handlers: HandlerTable::new(),
            max_connections: None,
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Binds `handler` to `method`, replacing any previous binding.
    pub fn register_handler(&mut self, method: impl Into<String>, handler: impl Handler + 'static) {
        self.handlers.register(method, Arc::new(handler));
    }

    /// Caps how many connections are served at once. Without a cap (or with
    /// a cap of zero) every accepted connection gets its own task immediately.
    pub fn with_max_connections(mut self, limit: Option<usize>) -> Self {
        self.max_connections = limit;
        self
    }

    /// Starts accepting connections.
    ///
    /// With `concurrent` the accept loop runs on its own task and its handle
    /// is returned. Otherwise it runs on the caller's task and only returns
    /// if accepting becomes impossible.
    pub async fn start(self, concurrent: bool) -> anyhow::Result<Option<JoinHandle<anyhow::Result<()>>>> {
        if concurrent {
            Ok(Some(tokio::spawn(self.serve())))
        } else {
            self.serve().await?;
            Ok(None)
        }
    }

    /// Runs the accept loop inline.
    pub async fn serve(self) -> anyhow::Result<()> {
        let limiter = self
            .max_connections
            .filter(|&n| n > 0)
            .map(|n| Arc::new(Semaphore::new(n)));
        listener::run(self.listener, Arc::new(self.handlers), limiter).await
    }
}
