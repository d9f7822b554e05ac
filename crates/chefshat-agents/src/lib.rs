//! # chefshat-agents
//!
//! Local Chef's Hat participants.
//!
//! Two in-process implementations of the participant contract:
//! - [`RandomAgent`], the uniformly random baseline
//! - [`ConsoleAgent`], a human playing over stdin

pub mod console;
pub mod random;

pub use console::ConsoleAgent;
pub use random::RandomAgent;
