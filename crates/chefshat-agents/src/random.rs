//! Uniformly random participant
//!
//! Picks among the actions the legality mask allows, with no memory and no
//! strategy. This is the baseline every other participant variant is
//! exercised against, and the stand-in used when hosting a bridge endpoint
//! that just needs to answer.

use async_trait::async_trait;
use chefshat_core::{
    ActionVector, Agent, EnvInfo, Observation, OnlyWinning, RewardFunction,
};
use rand::seq::SliceRandom;

pub struct RandomAgent {
    name: String,
    reward: Box<dyn RewardFunction>,
}

impl RandomAgent {
    /// Random participant named `RANDOM_<name>`, rewarded by [`OnlyWinning`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_reward(name, Box::new(OnlyWinning))
    }

    pub fn with_reward(name: impl Into<String>, reward: Box<dyn RewardFunction>) -> Self {
        Self {
            name: format!("RANDOM_{}", name.into()),
            reward,
        }
    }
}

#[async_trait]
impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_action(&mut self, observation: &Observation) -> ActionVector {
        let legal = observation.legal_actions();
        match legal.choose(&mut rand::thread_rng()) {
            Some(&index) => ActionVector::one_hot(index),
            None => ActionVector::zeros(),
        }
    }

    async fn get_reward(
        &mut self,
        info: &EnvInfo,
        _state_before: &Observation,
        _state_after: &Observation,
    ) -> f64 {
        self.reward
            .reward(info.this_player_position, info.this_player_finished)
    }
}
