//! # chefshat-bridge
//!
//! Synchronous TCP call-forwarding bridge for Chef's Hat participants.
//!
//! The engine process talks to out-of-process participants through this
//! crate: one connection per call, one call per connection, the caller
//! blocked until the reply lands. There is no pipelining, no timeout, and
//! no concurrent dispatch; the game is turn-based and the bridge mirrors
//! that.
//!
//! This crate provides:
//! - Terminator-delimited frame codec ([`frame`])
//! - The call/reply wire unions ([`AgentCall`], [`AgentReply`])
//! - [`RemoteAgent`], the client side the engine holds
//! - [`AgentServer`], the host loop wrapping a local participant
//! - [`HostedAgent`], a server spawned on a background task

pub mod call;
pub mod client;
pub mod frame;
pub mod hosted;
pub mod server;

pub use call::{decode_call, decode_reply, encode_call, encode_reply, AgentCall, AgentReply};
pub use client::{RemoteAgent, RemoteAgentConfig};
pub use frame::{read_frame, write_frame, TERMINATOR};
pub use hosted::HostedAgent;
pub use server::{AgentServer, ServerConfig};
