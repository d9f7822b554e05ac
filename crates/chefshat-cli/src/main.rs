//! chefshat-host: run a local participant behind the bridge server
//!
//! Hosts a participant process that an engine reaches through a
//! `RemoteAgent`. The engine connects once per call and the server answers
//! calls strictly one at a time.
//!
//! Usage: chefshat-host [port] [kind]
//!   port  listen port (default 8080)
//!   kind  "random" or "console" (default random)

use anyhow::Result;
use chefshat_agents::{ConsoleAgent, RandomAgent};
use chefshat_bridge::{AgentServer, ServerConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().collect();
    let port: u16 = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 8080,
    };
    let kind = args.get(2).map(String::as_str).unwrap_or("random");

    let config = ServerConfig {
        port,
        ..Default::default()
    };
    info!("Starting chefshat-host on port {} ({})", port, kind);

    match kind {
        "console" => {
            AgentServer::with_config(ConsoleAgent::new("Console"), config)
                .run()
                .await?
        }
        _ => {
            AgentServer::with_config(RandomAgent::new("Hosted"), config)
                .run()
                .await?
        }
    }
    Ok(())
}
