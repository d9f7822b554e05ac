//! # unity-bridge
//!
//! Tagged-text TCP bridge for the external Chef's Hat Unity client.
//!
//! The Unity build consumes plain ASCII rather than the JSON call frames:
//! every value crosses as a tag (`__list__int__`, `__bool__`, `__string__`)
//! followed by its rendering, framed with the same `.EOF` terminator as the
//! binary bridge. [`UnityAgent`] wraps the exchange behind the standard
//! participant contract.

pub mod agent;
pub mod wire;

pub use agent::{UnityAgent, UnityAgentConfig};
pub use wire::{decode_int_list, UnityValue, TAG_BOOL, TAG_INT_LIST, TAG_STRING};
