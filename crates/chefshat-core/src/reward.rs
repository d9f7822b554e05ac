//! Reward interface and the stock winning-only shaping
//!
//! Reward shaping proper lives with the engine; a participant only needs a
//! function to answer `get_reward`. [`OnlyWinning`] is the stock choice: a
//! small negative reward every step until the match resolves, then a payout
//! by finishing position.

/// Reward per step while the match is still running.
const STEP_REWARD: f64 = -0.001;

/// Computes a participant's scalar reward from its match standing.
pub trait RewardFunction: Send {
    /// Shaping name, for logs.
    fn name(&self) -> &'static str;

    /// Reward for one step. `position` is the finishing position (0 = first
    /// out); `match_finished` says whether this participant is done.
    fn reward(&self, position: i64, match_finished: bool) -> f64;
}

/// Pays (3 - position) / 3 once the participant finishes, the step reward
/// before that.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyWinning;

impl RewardFunction for OnlyWinning {
    fn name(&self) -> &'static str {
        "OnlyWinning"
    }

    fn reward(&self, position: i64, match_finished: bool) -> f64 {
        if match_finished {
            (3 - position) as f64 / 3.0
        } else {
            STEP_REWARD
        }
    }
}
