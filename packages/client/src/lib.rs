//! Terminal client for the k-in-a-row game server.
//!
//! Renders the board as text, reads moves from the terminal and keeps
//! reconnecting while the server is unreachable.

pub mod command;
pub mod error;
pub mod formatter;
mod prompt;
pub mod reconnect;
mod runner;
mod session;
pub mod view;

pub use runner::{MAX_RECONNECT_ATTEMPTS, run_client};
