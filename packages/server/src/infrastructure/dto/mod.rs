//! Data Transfer Objects (DTOs) for kinrow.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket frame DTOs (shared with the client)
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
