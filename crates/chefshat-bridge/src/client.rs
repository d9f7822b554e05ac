//! Remote participant client
//!
//! A [`RemoteAgent`] stands in for a participant whose decision logic lives
//! in another process behind an [`AgentServer`](crate::AgentServer). Every
//! operation is one full exchange: connect, send the call frame, wait for
//! the reply, close. Transport failures never escape the `Agent` impl; the
//! engine always receives a structurally valid default instead.

use async_trait::async_trait;
use chefshat_core::{
    ActionVector, Agent, ChefsHatError, EnvInfo, Observation, Result, ACTION_SPACE,
};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::call::{decode_reply, encode_call, AgentCall, AgentReply};
use crate::frame::{read_frame, write_frame};

/// Where the remote participant listens.
#[derive(Debug, Clone)]
pub struct RemoteAgentConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RemoteAgentConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Client side of the bridge: forwards every participant call over TCP.
pub struct RemoteAgent {
    name: String,
    config: RemoteAgentConfig,
}

impl RemoteAgent {
    /// Remote participant at the default address (127.0.0.1:8080).
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RemoteAgentConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: RemoteAgentConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Forward one call and decode its reply.
    ///
    /// Every failure mode surfaces here as an error; the `Agent` impl picks
    /// the substitute value per operation.
    pub async fn call(&self, call: &AgentCall) -> Result<AgentReply> {
        let addr = self.addr();
        let mut stream = TcpStream::connect(&addr)
            .await
            .map_err(|e| ChefsHatError::Transport(format!("Failed to connect to {}: {}", addr, e)))?;
        stream
            .set_nodelay(true)
            .map_err(|e| ChefsHatError::Transport(format!("Failed to set TCP_NODELAY: {}", e)))?;

        let payload = encode_call(call)?;
        debug!(
            "[{}] {} -> {} ({} bytes)",
            self.name,
            call.method(),
            addr,
            payload.len()
        );
        write_frame(&mut stream, &payload).await?;

        let reply = read_frame(&mut stream).await?;
        decode_reply(&reply)
    }
}

#[async_trait]
impl Agent for RemoteAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_action(&mut self, observation: &Observation) -> ActionVector {
        let call = AgentCall::GetAction {
            observation: observation.clone(),
        };
        match self.call(&call).await {
            Ok(AgentReply::Action(action)) if action.len() == ACTION_SPACE => action,
            Ok(_) => {
                warn!(
                    "[{}] getAction reply was not a {}-slot action, using zero vector",
                    self.name, ACTION_SPACE
                );
                ActionVector::zeros()
            }
            Err(e) => {
                warn!("[{}] getAction failed: {}, using zero vector", self.name, e);
                ActionVector::zeros()
            }
        }
    }

    async fn get_reward(
        &mut self,
        info: &EnvInfo,
        state_before: &Observation,
        state_after: &Observation,
    ) -> f64 {
        let call = AgentCall::GetReward {
            info: info.clone(),
            state_before: state_before.clone(),
            state_after: state_after.clone(),
        };
        match self.call(&call).await {
            Ok(AgentReply::Reward(value)) => value,
            Ok(_) => {
                warn!("[{}] getReward reply was not a scalar, using 0.0", self.name);
                0.0
            }
            Err(e) => {
                warn!("[{}] getReward failed: {}, using 0.0", self.name, e);
                0.0
            }
        }
    }

    async fn observe_others(&mut self, info: &EnvInfo) {
        let call = AgentCall::ObserveOthers { info: info.clone() };
        if let Err(e) = self.call(&call).await {
            warn!("[{}] observeOthers not delivered: {}", self.name, e);
        }
    }

    async fn action_update(
        &mut self,
        observation: &Observation,
        next_observation: &Observation,
        action: &ActionVector,
        info: &EnvInfo,
    ) {
        let call = AgentCall::ActionUpdate {
            observation: observation.clone(),
            next_observation: next_observation.clone(),
            action: action.clone(),
            info: info.clone(),
        };
        if let Err(e) = self.call(&call).await {
            warn!("[{}] actionUpdate not delivered: {}", self.name, e);
        }
    }

    async fn match_update(&mut self, info: &EnvInfo) {
        let call = AgentCall::MatchUpdate { info: info.clone() };
        if let Err(e) = self.call(&call).await {
            warn!("[{}] matchUpdate not delivered: {}", self.name, e);
        }
    }
}
