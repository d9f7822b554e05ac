//! Action space and the card-multiset codec
//!
//! Every participant variant must number moves identically, because the
//! legality mask in the observation is indexed by this scheme and nothing
//! else ties the two sides together. Index 199 passes, 198 discards a single
//! joker, and [0, 197] enumerate (rank, quantity, jokers) plays by
//! triangular offset: rank r owns the 3r indices starting at 3(r-1)r/2.

use serde::{Deserialize, Serialize};

use crate::observation::ACTION_SPACE;

/// Card rank, 1 through 12. 12 is the joker.
pub type Card = u8;

/// The joker rank.
pub const JOKER: Card = 12;
/// Action index for passing the turn.
pub const PASS: usize = ACTION_SPACE - 1;
/// Action index for discarding a single joker.
pub const DISCARD_JOKER: usize = ACTION_SPACE - 2;
/// At most this many jokers can augment a play.
pub const MAX_PLAY_JOKERS: usize = 2;

/// Encode a played card multiset into its action index.
///
/// Returns `None` when the cards span more than one non-joker rank, or when
/// two or more jokers are played alone. Quantity is clamped to the rank and
/// jokers to [`MAX_PLAY_JOKERS`] before encoding, and the final index
/// saturates into the action space. Order of `cards` does not matter.
pub fn encode_cards(cards: &[Card]) -> Option<usize> {
    let jokers = cards.iter().filter(|&&c| c == JOKER).count();
    let naturals: Vec<Card> = cards.iter().copied().filter(|&c| c != JOKER).collect();

    if naturals.is_empty() {
        return match (cards.len(), jokers) {
            (0, _) => Some(PASS),
            (1, 1) => Some(DISCARD_JOKER),
            _ => None,
        };
    }

    let rank = naturals[0];
    if naturals.iter().any(|&c| c != rank) {
        return None;
    }

    let rank = i64::from(rank);
    let quantity = (naturals.len() as i64).min(rank);
    let jokers = (jokers as i64).min(MAX_PLAY_JOKERS as i64);
    let index = 3 * (rank - 1) * rank / 2 + (quantity - 1) * 3 + jokers;
    Some(index.clamp(0, PASS as i64) as usize)
}

/// One-hot (or degraded all-zero) vector over the 200-slot action space.
///
/// The all-zero vector is the defined default whenever no decision could be
/// produced; the engine treats it as a failed turn rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionVector(Vec<u8>);

impl ActionVector {
    /// The all-zero vector.
    pub fn zeros() -> Self {
        Self(vec![0; ACTION_SPACE])
    }

    /// One-hot vector selecting `index`. Out-of-range indices select nothing.
    pub fn one_hot(index: usize) -> Self {
        let mut entries = vec![0; ACTION_SPACE];
        if index < ACTION_SPACE {
            entries[index] = 1;
        }
        Self(entries)
    }

    /// Wrap wire entries as-is, without shape checks.
    pub fn from_raw(entries: Vec<u8>) -> Self {
        Self(entries)
    }

    /// Raw entries.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the selected action, if the vector selects exactly one.
    pub fn action_index(&self) -> Option<usize> {
        let mut nonzero = self.0.iter().enumerate().filter(|&(_, &v)| v != 0);
        let first = nonzero.next();
        if nonzero.next().is_some() {
            return None;
        }
        match first {
            Some((index, 1)) => Some(index),
            _ => None,
        }
    }

    /// Whether the vector is structurally valid output: 200 slots selecting
    /// exactly one action.
    pub fn is_one_hot(&self) -> bool {
        self.0.len() == ACTION_SPACE && self.action_index().is_some()
    }
}
