//! Terminal client for the k-in-a-row game server.
//!
//! Shows the board after every move and sends moves typed as `<row> <col>`.
//! Reconnects on disconnection (max 5 attempts with 5 second interval); the
//! same client id takes back its seat. A full game or a duplicate client id
//! ends the client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kinrow-client -- --client-id alice
//! cargo run --bin kinrow-client -- -c bob -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;
use kinrow_client::run_client;
use kinrow_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "kinrow-client")]
#[command(about = "Terminal client for the k-in-a-row game server", long_about = None)]
struct Args {
    /// Client ID identifying this participant across reconnections
    #[arg(short = 'c', long)]
    client_id: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(args.url, args.client_id).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
