//! Beacon - static file server
//!
//! Serves every file under a document root over a minimal HTTP/1.1
//! dialect: one request line in, one response out, then close.

pub mod config;
pub mod handler;
pub mod http;
pub mod resource;
pub mod server;

use std::sync::Arc;

use config::Config;
use handler::GetHandler;
use resource::{MimeTable, Registry};
use server::Server;

/// Builds the default server for `cfg`: the document root discovered into
/// a registry and a single `GET` handler.
pub async fn build_server(cfg: &Config) -> anyhow::Result<Server> {
    let registry = Registry::discover(&cfg.static_files.root)?;
    tracing::info!(
        root = %cfg.static_files.root.display(),
        resources = registry.len(),
        "Document root indexed"
    );

    let mime_table = MimeTable::default().with_entries(cfg.static_files.mime_types.clone());
    let get = GetHandler::new(Arc::new(registry), Arc::new(mime_table))
        .with_content_type_header(cfg.server.content_type_header.clone());

    let mut server = Server::bind(&cfg.server.listen_addr)
        .await?
        .with_max_connections(cfg.server.max_connections);
    server.register_handler("GET", get);

    Ok(server)
}

/// Serves `cfg` on the current task until accepting fails.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    build_server(cfg).await?.start(false).await?;
    Ok(())
}
