//! Utilities shared by the kinrow server and client.

pub mod logger;
pub mod time;
