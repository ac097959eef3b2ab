//! Two-player k-in-a-row game server.
//!
//! Admits two participants over WebSocket, lets the first one choose the board
//! size and the winning run length, then referees the game.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kinrow-server
//! cargo run --bin kinrow-server -- --host 0.0.0.0 --port 3000 --max-board-size 30
//! ```

use std::sync::Arc;

use clap::Parser;
use kinrow_server::{
    domain::MIN_WIN_LENGTH,
    infrastructure::sync_channel::WebSocketSyncChannel,
    ui::Server,
    usecase::{ManagerSettings, SessionManager},
};
use kinrow_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "kinrow-server")]
#[command(about = "Two-player k-in-a-row game server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Largest board size a participant may request (3 to 1000)
    #[arg(
        long,
        default_value_t = ManagerSettings::DEFAULT_MAX_BOARD_SIZE,
        value_parser = parse_max_board_size
    )]
    max_board_size: usize,
}

/// Accepts board sizes that can hold the shortest winning run, up to the hard limit.
fn parse_max_board_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|e| format!("'{}' is not a board size: {}", value, e))?;
    let allowed = MIN_WIN_LENGTH..=ManagerSettings::MAX_BOARD_SIZE_LIMIT;
    if !allowed.contains(&size) {
        return Err(format!(
            "board size must be between {} and {}",
            allowed.start(),
            allowed.end()
        ));
    }
    Ok(size)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // 依存関係の組み立て
    let channel = Arc::new(WebSocketSyncChannel::new());
    let clock = Arc::new(SystemClock);
    let settings = ManagerSettings {
        max_board_size: args.max_board_size,
    };
    let session_manager = SessionManager::new(channel, clock, settings);

    let server = Server::new(session_manager);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
