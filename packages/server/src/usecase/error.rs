//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::ConfigError;

/// 参加者受付のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// 2 人のプレイヤーが既に接続している
    #[error("Game is full")]
    CapacityExceeded,

    /// 同じ参加者 ID が既に接続している
    #[error("Participant '{0}' is already connected")]
    DuplicateParticipant(String),
}

/// セッション構成のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigureError {
    /// コネクションがプレイヤーに割り当てられていない
    #[error("connection is not bound to a player")]
    NotSeated,

    /// 構成権限を持つ参加者ではない
    #[error("only the first connected participant may configure the game")]
    NotConfigurator,

    /// 盤面サイズ・勝利数が範囲外
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
