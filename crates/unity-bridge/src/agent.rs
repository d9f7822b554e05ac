//! Unity participant: push the observation, pull the selection
//!
//! The Unity client is a server from the bridge's point of view: for each
//! decision the agent connects, pushes the denormalized observation, waits
//! for the selection list, and closes. Reward and notification calls never
//! cross this wire; the client only ever sees observations.

use async_trait::async_trait;
use chefshat_bridge::frame::{read_frame, write_frame};
use chefshat_core::{ActionVector, Agent, ChefsHatError, Observation, Result, ACTION_SPACE};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::wire::{decode_int_list, UnityValue};

/// Where the Unity client listens.
#[derive(Debug, Clone)]
pub struct UnityAgentConfig {
    pub host: String,
    pub port: u16,
}

impl Default for UnityAgentConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Participant whose decisions come from the external Unity client.
pub struct UnityAgent {
    name: String,
    config: UnityAgentConfig,
}

impl UnityAgent {
    /// Unity participant at the default address (127.0.0.1:8000).
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, UnityAgentConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: UnityAgentConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// One exchange: connect, push one value, pull the integer list, close.
    async fn exchange(&self, value: &UnityValue) -> Result<Vec<i64>> {
        let addr = self.addr();
        let mut stream = TcpStream::connect(&addr)
            .await
            .map_err(|e| ChefsHatError::Transport(format!("Failed to connect to {}: {}", addr, e)))?;
        stream
            .set_nodelay(true)
            .map_err(|e| ChefsHatError::Transport(format!("Failed to set TCP_NODELAY: {}", e)))?;

        write_frame(&mut stream, &value.encode()).await?;
        let payload = read_frame(&mut stream).await?;
        Ok(decode_int_list(&payload))
    }
}

#[async_trait]
impl Agent for UnityAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_action(&mut self, observation: &Observation) -> ActionVector {
        let message = UnityValue::from_observation(observation);
        match self.exchange(&message).await {
            Ok(selection) if selection.len() == ACTION_SPACE => {
                debug!("[{}] client selected {:?}", self.name, selection.iter().position(|&v| v != 0));
                ActionVector::from_raw(selection.iter().map(|&v| v as u8).collect())
            }
            Ok(selection) => {
                warn!(
                    "[{}] client sent {} entries, expected {}; using zero vector",
                    self.name,
                    selection.len(),
                    ACTION_SPACE
                );
                ActionVector::zeros()
            }
            Err(e) => {
                warn!("[{}] exchange failed: {}, using zero vector", self.name, e);
                ActionVector::zeros()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::TAG_INT_LIST;
    use tokio::net::TcpListener;

    /// One-shot stand-in for the Unity client: accepts a single connection,
    /// checks the pushed observation, answers with a selection list.
    async fn fake_unity(selection_index: usize) -> UnityAgentConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let payload = read_frame(&mut stream).await.unwrap();
            let text = String::from_utf8(payload).unwrap();
            assert!(text.starts_with(TAG_INT_LIST));

            let mut selection = vec![0i64; ACTION_SPACE];
            selection[selection_index] = 1;
            let reply = UnityValue::Ints(selection);
            write_frame(&mut stream, &reply.encode()).await.unwrap();
        });
        UnityAgentConfig {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn test_get_action_round_trip() {
        let config = fake_unity(31).await;
        let mut agent = UnityAgent::with_config("Unity", config);

        let observation = Observation::from_parts(&[3], &[5, 12], &[31, 199]).unwrap();
        let action = agent.get_action(&observation).await;
        assert_eq!(action.action_index(), Some(31));
    }

    #[tokio::test]
    async fn test_corrupt_selection_degrades_to_zeros() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let _ = read_frame(&mut stream).await.unwrap();
            // A garbage token alongside 200 parseable integers: the decode
            // voids the payload, so the length gate never sees 200 entries.
            let mut reply = format!("{}junk", TAG_INT_LIST);
            for _ in 0..ACTION_SPACE {
                reply.push_str(" 1");
            }
            write_frame(&mut stream, reply.as_bytes()).await.unwrap();
        });

        let config = UnityAgentConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        let mut agent = UnityAgent::with_config("Unity", config);
        let action = agent.get_action(&Observation::empty()).await;
        assert_eq!(action, ActionVector::zeros());
    }

    #[tokio::test]
    async fn test_short_selection_degrades_to_zeros() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let _ = read_frame(&mut stream).await.unwrap();
            let reply = UnityValue::Ints(vec![1, 0, 0]);
            write_frame(&mut stream, &reply.encode()).await.unwrap();
        });

        let config = UnityAgentConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        let mut agent = UnityAgent::with_config("Unity", config);
        let action = agent.get_action(&Observation::empty()).await;
        assert_eq!(action, ActionVector::zeros());
    }

    #[tokio::test]
    async fn test_unreachable_client_degrades_to_zeros() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = UnityAgentConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        let mut agent = UnityAgent::with_config("Unity", config);
        let action = agent.get_action(&Observation::empty()).await;
        assert_eq!(action, ActionVector::zeros());
    }

    #[test]
    fn test_default_config() {
        let config = UnityAgentConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
    }
}
