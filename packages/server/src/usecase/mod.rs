//! UseCase layer
//!
//! 参加者の受付、セッションの構成、手の適用を調停する `SessionManager` を提供します。

mod error;
mod session_manager;

pub use error::{AdmissionError, ConfigureError};
pub use session_manager::{Admission, ManagerSettings, SessionManager};
