//! Bridge server: hosts a local participant for remote callers
//!
//! The loop is strictly sequential: accept one connection, read one call,
//! answer it, close, and only then accept the next. Dispatch is fixed to
//! the five participant operations; a frame that does not decode as one of
//! them is answered with the null marker so a confused caller still gets a
//! well-formed reply.

use chefshat_core::{Agent, ChefsHatError, Result};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::call::{decode_call, encode_reply, AgentCall, AgentReply};
use crate::frame::{read_frame, write_frame};

/// Listen address for an [`AgentServer`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Hosts one local participant and answers forwarded calls one at a time.
pub struct AgentServer<A: Agent> {
    agent: A,
    config: ServerConfig,
}

impl<A: Agent> AgentServer<A> {
    /// Server for `agent` on the default address (0.0.0.0:8080).
    pub fn new(agent: A) -> Self {
        Self::with_config(agent, ServerConfig::default())
    }

    pub fn with_config(agent: A, config: ServerConfig) -> Self {
        Self { agent, config }
    }

    /// Bind the configured address and serve until the task is cancelled.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ChefsHatError::Transport(format!("Failed to bind {}: {}", addr, e)))?;
        info!("Hosting {} on {}", self.agent.name(), addr);
        self.serve(listener).await
    }

    /// Serve on an already-bound listener. Lets callers bind port 0 and
    /// learn the address before the loop starts.
    pub async fn serve(mut self, listener: TcpListener) -> Result<()> {
        loop {
            let (stream, peer) = listener
                .accept()
                .await
                .map_err(|e| ChefsHatError::Transport(format!("Accept failed: {}", e)))?;
            // The next accept waits until this exchange is done and the
            // socket is closed.
            if let Err(e) = handle_connection(&mut self.agent, stream).await {
                warn!("Connection from {} dropped: {}", peer, e);
            }
        }
    }
}

/// Answer one call on one connection.
async fn handle_connection<A: Agent>(agent: &mut A, mut stream: TcpStream) -> Result<()> {
    let payload = read_frame(&mut stream).await?;
    let reply = match decode_call(&payload) {
        Ok(call) => {
            debug!("[{}] <- {}", agent.name(), call.method());
            dispatch(agent, call).await
        }
        Err(e) => {
            // Unknown methods and malformed frames both land here.
            warn!("[{}] undecodable call frame ({}), replying null", agent.name(), e);
            AgentReply::None
        }
    };
    let bytes = encode_reply(&reply)?;
    write_frame(&mut stream, &bytes).await?;
    Ok(())
}

/// Invoke the operation a call names and wrap its result.
async fn dispatch<A: Agent>(agent: &mut A, call: AgentCall) -> AgentReply {
    match call {
        AgentCall::GetAction { observation } => {
            AgentReply::Action(agent.get_action(&observation).await)
        }
        AgentCall::GetReward {
            info,
            state_before,
            state_after,
        } => AgentReply::Reward(agent.get_reward(&info, &state_before, &state_after).await),
        AgentCall::ObserveOthers { info } => {
            agent.observe_others(&info).await;
            AgentReply::None
        }
        AgentCall::ActionUpdate {
            observation,
            next_observation,
            action,
            info,
        } => {
            agent
                .action_update(&observation, &next_observation, &action, &info)
                .await;
            AgentReply::None
        }
        AgentCall::MatchUpdate { info } => {
            agent.match_update(&info).await;
            AgentReply::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::decode_reply;
    use crate::hosted::HostedAgent;
    use async_trait::async_trait;
    use chefshat_core::{ActionVector, EnvInfo, Observation};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::AsyncWriteExt;

    /// Fixed-answer participant that counts the hooks reaching it.
    struct Scripted {
        action: usize,
        hooks: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn new(action: usize) -> (Self, Arc<AtomicUsize>) {
            let hooks = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    action,
                    hooks: hooks.clone(),
                },
                hooks,
            )
        }
    }

    #[async_trait]
    impl Agent for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn get_action(&mut self, _observation: &Observation) -> ActionVector {
            ActionVector::one_hot(self.action)
        }

        async fn get_reward(
            &mut self,
            info: &EnvInfo,
            _state_before: &Observation,
            _state_after: &Observation,
        ) -> f64 {
            info.this_player_position as f64
        }

        async fn observe_others(&mut self, _info: &EnvInfo) {
            self.hooks.fetch_add(1, Ordering::SeqCst);
        }

        async fn match_update(&mut self, _info: &EnvInfo) {
            self.hooks.fetch_add(1, Ordering::SeqCst);
        }
    }

    async fn raw_exchange(addr: std::net::SocketAddr, payload: &[u8]) -> Vec<u8> {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(payload).await.unwrap();
        stream.write_all(crate::frame::TERMINATOR).await.unwrap();
        read_frame(&mut stream).await.unwrap()
    }

    #[tokio::test]
    async fn test_serves_calls_sequentially_over_fresh_connections() {
        let (agent, hooks) = Scripted::new(30);
        let hosted = HostedAgent::spawn(agent, "127.0.0.1:0").await.unwrap();
        let mut remote = hosted.remote("Caller");

        let observation = Observation::from_parts(&[], &[5], &[30, 199]).unwrap();
        // Each call opens its own connection; the server answers them
        // back to back.
        for _ in 0..3 {
            let action = remote.get_action(&observation).await;
            assert_eq!(action.action_index(), Some(30));
        }

        let info = EnvInfo {
            this_player_position: 2,
            ..Default::default()
        };
        let reward = remote.get_reward(&info, &observation, &observation).await;
        assert_eq!(reward, 2.0);

        // Hook round trips complete before the client call returns.
        remote.observe_others(&info).await;
        remote.match_update(&info).await;
        assert_eq!(hooks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_hosted_random_agent_end_to_end() {
        let agent = chefshat_agents::RandomAgent::new("Hosted");
        let hosted = HostedAgent::spawn(agent, "127.0.0.1:0").await.unwrap();
        let mut remote = hosted.remote("Engine");

        let observation = Observation::from_parts(&[], &[5, 5], &[30, 33, 199]).unwrap();
        for _ in 0..10 {
            let action = remote.get_action(&observation).await;
            assert!(action.is_one_hot());
            assert!(observation.is_legal(action.action_index().unwrap()));
        }
    }

    #[tokio::test]
    async fn test_unknown_method_gets_null_reply() {
        let (agent, _) = Scripted::new(0);
        let hosted = HostedAgent::spawn(agent, "127.0.0.1:0").await.unwrap();

        let reply = raw_exchange(hosted.addr(), b"{\"Method\":\"resetHats\"}").await;
        assert_eq!(decode_reply(&reply).unwrap(), AgentReply::None);
    }

    #[tokio::test]
    async fn test_malformed_frame_gets_null_reply() {
        let (agent, _) = Scripted::new(0);
        let hosted = HostedAgent::spawn(agent, "127.0.0.1:0").await.unwrap();

        let reply = raw_exchange(hosted.addr(), b"this is not a call").await;
        assert_eq!(decode_reply(&reply).unwrap(), AgentReply::None);

        // The loop survives the bad frame and keeps answering.
        let mut remote = hosted.remote("After");
        let observation = Observation::from_parts(&[], &[], &[199]).unwrap();
        assert_eq!(remote.get_action(&observation).await.action_index(), Some(0));
    }

    #[tokio::test]
    async fn test_hook_calls_reply_null_on_the_wire() {
        let (agent, hooks) = Scripted::new(0);
        let hosted = HostedAgent::spawn(agent, "127.0.0.1:0").await.unwrap();

        let reply = raw_exchange(
            hosted.addr(),
            b"{\"Method\":\"observeOthers\",\"info\":{}}",
        )
        .await;
        assert_eq!(decode_reply(&reply).unwrap(), AgentReply::None);
        assert_eq!(hooks.load(Ordering::SeqCst), 1);
    }
}
