//! Server state shared by all handlers.

use tokio::sync::Mutex;

use crate::usecase::SessionManager;

/// Shared application state
///
/// Every inbound event locks the session manager for the whole of its
/// handling, so events are applied one at a time in arrival order.
pub struct AppState {
    pub session_manager: Mutex<SessionManager>,
}

impl AppState {
    pub fn new(session_manager: SessionManager) -> Self {
        Self {
            session_manager: Mutex::new(session_manager),
        }
    }
}
