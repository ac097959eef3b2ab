//! Two-player k-in-a-row game server library.
//!
//! The server admits exactly two participants over WebSocket, keeps the
//! authoritative board, alternates turns and decides wins and draws.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
