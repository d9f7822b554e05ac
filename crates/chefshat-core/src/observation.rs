//! Observation layout and accessors
//!
//! The engine hands every participant one flat 228-slot vector per decision:
//! 11 board slots, 17 hand slots, then the 200-entry action legality mask.
//! Card values arrive normalized (rank divided by 13); the accessors here
//! denormalize them back to ranks for display and for the external bridge.

use serde::{Deserialize, Serialize};

use crate::error::{ChefsHatError, Result};

/// Board slots at the front of the observation.
pub const BOARD_SIZE: usize = 11;
/// Hand slots following the board.
pub const HAND_SIZE: usize = 17;
/// Size of the discrete action space.
pub const ACTION_SPACE: usize = 200;
/// Total observation length: board, hand, and legality mask.
pub const OBSERVATION_SIZE: usize = BOARD_SIZE + HAND_SIZE + ACTION_SPACE;

/// Offset of the first hand slot.
pub const HAND_OFFSET: usize = BOARD_SIZE;
/// Offset of the first legality mask entry.
pub const MASK_OFFSET: usize = BOARD_SIZE + HAND_SIZE;

/// Card values cross the engine boundary divided by this factor.
pub const CARD_SCALE: f64 = 13.0;

/// One engine observation: board, hand, and legality mask.
///
/// Always exactly [`OBSERVATION_SIZE`] entries; the constructors and the
/// serde path both enforce the shape, so accessors can slice freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct Observation(Vec<f64>);

impl Observation {
    /// Wrap a raw engine vector, enforcing the fixed shape.
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        if values.len() != OBSERVATION_SIZE {
            return Err(ChefsHatError::InvalidObservation(format!(
                "expected {} entries, got {}",
                OBSERVATION_SIZE,
                values.len()
            )));
        }
        Ok(Self(values))
    }

    /// Build an observation from card ranks and legal action indices.
    ///
    /// Board and hand are padded with empty slots; the mask is set to 1.0 at
    /// each index in `legal`.
    pub fn from_parts(board: &[u8], hand: &[u8], legal: &[usize]) -> Result<Self> {
        if board.len() > BOARD_SIZE {
            return Err(ChefsHatError::InvalidObservation(format!(
                "board holds at most {} cards, got {}",
                BOARD_SIZE,
                board.len()
            )));
        }
        if hand.len() > HAND_SIZE {
            return Err(ChefsHatError::InvalidObservation(format!(
                "hand holds at most {} cards, got {}",
                HAND_SIZE,
                hand.len()
            )));
        }

        let mut values = vec![0.0; OBSERVATION_SIZE];
        for (slot, &card) in values.iter_mut().zip(board) {
            *slot = normalize(card);
        }
        for (slot, &card) in values[HAND_OFFSET..].iter_mut().zip(hand) {
            *slot = normalize(card);
        }
        for &index in legal {
            if index >= ACTION_SPACE {
                return Err(ChefsHatError::InvalidObservation(format!(
                    "legal action index {} out of range",
                    index
                )));
            }
            values[MASK_OFFSET + index] = 1.0;
        }
        Ok(Self(values))
    }

    /// All-zero observation: empty board, empty hand, nothing legal.
    pub fn empty() -> Self {
        Self(vec![0.0; OBSERVATION_SIZE])
    }

    /// Raw normalized entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Board card ranks, denormalized. 0 means an empty slot.
    pub fn board_cards(&self) -> Vec<u8> {
        self.0[..BOARD_SIZE].iter().map(|&v| denormalize(v)).collect()
    }

    /// Hand card ranks, denormalized. 0 means a padding slot.
    pub fn hand_cards(&self) -> Vec<u8> {
        self.0[HAND_OFFSET..MASK_OFFSET]
            .iter()
            .map(|&v| denormalize(v))
            .collect()
    }

    /// The 200-entry legality mask.
    pub fn legal_mask(&self) -> &[f64] {
        &self.0[MASK_OFFSET..]
    }

    /// Indices of the actions the mask marks legal.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.legal_mask()
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the mask marks `index` legal.
    pub fn is_legal(&self, index: usize) -> bool {
        self.legal_mask().get(index).is_some_and(|&m| m > 0.0)
    }
}

impl From<Observation> for Vec<f64> {
    fn from(observation: Observation) -> Self {
        observation.0
    }
}

impl TryFrom<Vec<f64>> for Observation {
    type Error = ChefsHatError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_vec(values)
    }
}

/// Normalize a card rank for the engine boundary.
pub fn normalize(card: u8) -> f64 {
    f64::from(card) / CARD_SCALE
}

/// Recover a card rank from its normalized representation, truncating.
pub fn denormalize(value: f64) -> u8 {
    (value * CARD_SCALE) as u8
}
