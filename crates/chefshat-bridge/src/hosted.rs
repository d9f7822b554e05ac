//! Hosted participants: a local agent behind its own server loop
//!
//! Useful when one process plays both sides: the driver (or a test) spawns
//! the participant's server on a background task, learns the bound address,
//! and reaches it through a [`RemoteAgent`] exactly as a separate process
//! would. Dropping the handle aborts the loop.

use std::net::SocketAddr;

use chefshat_core::{Agent, ChefsHatError, Result};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::client::{RemoteAgent, RemoteAgentConfig};
use crate::server::AgentServer;

/// Handle to a participant served on a background task.
pub struct HostedAgent {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl HostedAgent {
    /// Bind `addr` (port 0 picks a free port) and serve `agent` on a
    /// background task.
    pub async fn spawn<A: Agent + 'static>(agent: A, addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ChefsHatError::Transport(format!("Failed to bind {}: {}", addr, e)))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ChefsHatError::Transport(format!("No local address: {}", e)))?;

        let name = agent.name().to_string();
        let handle = tokio::spawn(async move {
            if let Err(e) = AgentServer::new(agent).serve(listener).await {
                error!("Hosted agent server exited: {}", e);
            }
        });
        info!("Hosted {} on {}", name, addr);
        Ok(Self { addr, handle })
    }

    /// Address the hosted participant answers on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// A [`RemoteAgent`] pointed at this participant.
    pub fn remote(&self, name: impl Into<String>) -> RemoteAgent {
        RemoteAgent::with_config(
            name,
            RemoteAgentConfig {
                host: self.addr.ip().to_string(),
                port: self.addr.port(),
            },
        )
    }

    /// Stop the server loop.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for HostedAgent {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
