//! Infrastructure layer
//!
//! ワイヤーフォーマット（DTO）と、ドメイン層の `SyncChannel` trait の実装を提供します。

pub mod dto;
pub mod sync_channel;
