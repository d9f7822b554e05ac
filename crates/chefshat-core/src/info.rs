//! Environment info attached to reward and notification calls

use serde::{Deserialize, Serialize};

/// Step and match context the engine passes alongside observations.
///
/// Every field is defaulted so senders may omit what they do not track;
/// unknown fields are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvInfo {
    /// Whether the engine accepted the last submitted action.
    pub valid_action: bool,
    /// This participant's finishing position, 0 (first out) through 3.
    pub this_player_position: i64,
    /// Whether this participant has emptied their hand.
    pub this_player_finished: bool,
    /// Accumulated score per seat.
    pub score: Vec<f64>,
    /// Performance score per seat.
    pub performance_score: Vec<f64>,
}
