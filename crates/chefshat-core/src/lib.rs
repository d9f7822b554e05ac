//! # chefshat-core
//!
//! Core types for the Chef's Hat agent bridge.
//!
//! This crate provides the foundations shared by every participant variant:
//! - The [`Agent`] capability contract the engine drives participants through
//! - [`Observation`] and [`ActionVector`] shapes with their fixed layout
//! - The card-multiset action codec ([`encode_cards`])
//! - The [`RewardFunction`] interface and stock shaping
//! - Shared error types

pub mod action;
pub mod agent;
pub mod error;
pub mod info;
pub mod observation;
pub mod reward;

pub use action::{encode_cards, ActionVector, Card};
pub use agent::Agent;
pub use error::{ChefsHatError, Result};
pub use info::EnvInfo;
pub use observation::{Observation, ACTION_SPACE, OBSERVATION_SIZE};
pub use reward::{OnlyWinning, RewardFunction};
