use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::http::connection::Connection;
use crate::routing::{Dispatcher, Method, Router};

/// Owns the listening socket and the accept loop.
///
/// `start` binds and spawns the accept loop; every accepted connection is
/// served on its own task, so connections never block one another.
/// `shutdown` stops accepting new connections and is idempotent; in-flight
/// connections run to completion.
pub struct Server {
    listen_addr: String,
    router: Arc<Router>,
    dispatcher: Dispatcher,
    local_addr: Option<SocketAddr>,
    shutdown_tx: Option<watch::Sender<bool>>,
}

impl Server {
    pub fn new(listen_addr: impl Into<String>, router: Router) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            router: Arc::new(router),
            dispatcher: Dispatcher::new(Method::KNOWN),
            local_addr: None,
            shutdown_tx: None,
        }
    }

    /// Binds the listener and spawns the accept loop.
    pub async fn start(&mut self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.listen_addr))?;
        let local_addr = listener
            .local_addr()
            .context("listener has no local address")?;

        let (tx, mut rx) = watch::channel(false);
        self.shutdown_tx = Some(tx);
        self.local_addr = Some(local_addr);
        info!(addr = %local_addr, "listening");

        let router = Arc::clone(&self.router);
        let dispatcher = self.dispatcher;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    accepted = listener.accept() => {
                        match accepted {
                            Ok((socket, peer)) => {
                                info!(peer = %peer, "accepted connection");
                                let conn = Connection::new(socket, Arc::clone(&router), dispatcher);
                                tokio::spawn(async move {
                                    if let Err(e) = conn.run().await {
                                        error!(peer = %peer, error = %e, "connection error");
                                    }
                                });
                            }
                            Err(e) => {
                                warn!(error = %e, "accept failed");
                            }
                        }
                    }

                    _ = rx.changed() => {
                        info!("accept loop stopping");
                        break;
                    }
                }
            }
        });

        Ok(())
    }

    /// Stops accepting new connections and drops the listener.
    ///
    /// Safe to call before `start` and any number of times after.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
        }
        self.local_addr = None;
    }

    /// The bound address, or `None` when the server is not running.
    pub fn address(&self) -> Option<SocketAddr> {
        self.local_addr
    }
}
