//! Call frames: the five participant operations and their replies
//!
//! One frame carries one call, tagged with the wire method name; the answer
//! frame carries an action vector, a scalar reward, or the explicit null
//! marker. Both sides are closed unions: a frame that does not match one of
//! these shapes does not decode, and the server answers it with the null
//! marker instead of an error.

use chefshat_core::{ActionVector, EnvInfo, Observation, Result};
use serde::{Deserialize, Serialize};

/// One forwarded participant call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Method")]
pub enum AgentCall {
    /// Produce an action for the given observation.
    #[serde(rename = "getAction")]
    GetAction { observation: Observation },

    /// Report the reward for the step between two observations.
    #[serde(rename = "getReward")]
    GetReward {
        info: EnvInfo,
        #[serde(rename = "stateBefore")]
        state_before: Observation,
        #[serde(rename = "stateAfter")]
        state_after: Observation,
    },

    /// Notify that another participant moved.
    #[serde(rename = "observeOthers")]
    ObserveOthers { info: EnvInfo },

    /// Notify that this participant's own move resolved.
    #[serde(rename = "actionUpdate")]
    ActionUpdate {
        observation: Observation,
        #[serde(rename = "nextObservation")]
        next_observation: Observation,
        action: ActionVector,
        info: EnvInfo,
    },

    /// Notify that a match completed.
    #[serde(rename = "matchUpdate")]
    MatchUpdate { info: EnvInfo },
}

impl AgentCall {
    /// Wire method name, for logs.
    pub fn method(&self) -> &'static str {
        match self {
            AgentCall::GetAction { .. } => "getAction",
            AgentCall::GetReward { .. } => "getReward",
            AgentCall::ObserveOthers { .. } => "observeOthers",
            AgentCall::ActionUpdate { .. } => "actionUpdate",
            AgentCall::MatchUpdate { .. } => "matchUpdate",
        }
    }
}

/// One reply value, or the explicit absence of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Kind", content = "Value")]
pub enum AgentReply {
    /// Decision produced by `getAction`.
    Action(ActionVector),
    /// Scalar produced by `getReward`.
    Reward(f64),
    /// Null marker: notification hooks and unrecognized calls.
    None,
}

/// Serialize a call to JSON bytes.
pub fn encode_call(call: &AgentCall) -> Result<Vec<u8>> {
    serde_json::to_vec(call).map_err(Into::into)
}

/// Deserialize a call from JSON bytes.
pub fn decode_call(payload: &[u8]) -> Result<AgentCall> {
    serde_json::from_slice(payload).map_err(Into::into)
}

/// Serialize a reply to JSON bytes.
pub fn encode_reply(reply: &AgentReply) -> Result<Vec<u8>> {
    serde_json::to_vec(reply).map_err(Into::into)
}

/// Deserialize a reply from JSON bytes.
pub fn decode_reply(payload: &[u8]) -> Result<AgentReply> {
    serde_json::from_slice(payload).map_err(Into::into)
}
