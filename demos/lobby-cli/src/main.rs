//! Drives a lobby from standard input.
//!
//! Each line is `<identity> <name>`; a line with only an identity joins
//! without a name. `master` as the name takes the master seat. Once the
//! game starts, the seating and every player's role card are printed.
//!
//! ```text
//! cargo run -p lobby-cli -- demos/lobby-cli/roles.json
//! RUST_LOG=debug cargo run -p lobby-cli
//! ```

use lupus::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Role file used when neither an argument nor `LUPUS_ROLES` names one.
const BUNDLED_ROLES: &str = include_str!("../roles.json");

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

fn build_lobby() -> Result<Lobby<MemoryCatalog>, LupusError> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("LUPUS_ROLES").ok());

    let builder = Lobby::builder();
    match path {
        Some(path) => builder.roles_file(path).build(),
        None => builder.roles_json(BUNDLED_ROLES).build(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let lobby = build_lobby()?;
    let seats = lobby.game().read().await.role_pool().len();
    tracing::info!(seats, "lobby open, waiting for players and a master");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(identity) = parts.next() else {
            continue;
        };
        let name = parts.next();

        let accepted = lobby.join(identity, name).await;
        let progress = lobby.game().lobby_progress_percent().await;
        println!(
            "{identity}: {} ({progress}%)",
            if accepted { "joined" } else { "rejected" }
        );

        if lobby.game().has_started().await {
            print_table(&lobby).await?;
            break;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

async fn print_table(lobby: &Lobby<MemoryCatalog>) -> Result<(), Box<dyn std::error::Error>> {
    let seating: Vec<Identity> = {
        let game = lobby.game().read().await;
        game.players().map(|(id, _)| id.clone()).collect()
    };

    println!("game started, seating order:");
    for (seat, identity) in seating.iter().enumerate() {
        let card = lobby.role_card(identity).await?;
        let json = serde_json::to_string(&card)?;
        println!("  {seat}: {identity} {json}");
    }
    Ok(())
}
