//! The participant capability contract
//!
//! Every participant variant implements [`Agent`]: local automated players,
//! the console human, remote processes behind the bridge, and the external
//! Unity client. The engine drives participants through this trait alone and
//! never learns how a decision was produced. Operations do not return
//! errors: implementations absorb their own failures and degrade to the
//! defined defaults (zero action vector, zero reward, skipped notification).

use async_trait::async_trait;

use crate::action::ActionVector;
use crate::info::EnvInfo;
use crate::observation::Observation;

#[async_trait]
pub trait Agent: Send {
    /// Participant display name.
    fn name(&self) -> &str;

    /// Produce the action vector for one decision point.
    ///
    /// The result must be structurally valid (200 slots); legality against
    /// the observation's mask is the engine's to enforce.
    async fn get_action(&mut self, observation: &Observation) -> ActionVector;

    /// Scalar reward for the step that just resolved.
    async fn get_reward(
        &mut self,
        info: &EnvInfo,
        state_before: &Observation,
        state_after: &Observation,
    ) -> f64 {
        let _ = (info, state_before, state_after);
        0.0
    }

    /// Notification after another participant's move.
    async fn observe_others(&mut self, info: &EnvInfo) {
        let _ = info;
    }

    /// Notification after this participant's own move resolves.
    async fn action_update(
        &mut self,
        observation: &Observation,
        next_observation: &Observation,
        action: &ActionVector,
        info: &EnvInfo,
    ) {
        let _ = (observation, next_observation, action, info);
    }

    /// Notification once per completed match.
    async fn match_update(&mut self, info: &EnvInfo) {
        let _ = info;
    }
}
