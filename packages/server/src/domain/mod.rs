//! Domain layer
//!
//! ゲームのルール（盤面、手番、勝敗判定）と、外部への通知インターフェースを定義します。
//! このモジュールは他のレイヤーに依存しません。

pub mod board;
pub mod channel;
pub mod coordinate;
pub mod error;
pub mod event;
pub mod identity;
pub mod player;
pub mod session;
pub mod win_detector;

pub use board::Board;
pub use channel::{OutboundFrame, PusherChannel, SyncChannel};
pub use coordinate::Coordinate;
pub use error::{ChannelError, ConfigError, IdentityError, MoveRejection};
pub use event::{GameEvent, SessionSnapshot};
pub use identity::{ConnectionId, ParticipantId};
pub use player::{Player, PlayerPair, Seat, Symbol, initial_players};
pub use session::{GameConfig, GameSession, MIN_WIN_LENGTH, MoveOutcome, SessionStatus};
pub use win_detector::Axis;

#[cfg(test)]
pub use channel::MockSyncChannel;
