//! Mancala - wiring and a self-playing demo game
//!
//! This binary is the composition root: it owns the in-memory store,
//! builds the use cases around it and plays a full game move by move,
//! each player always sowing from their first non-empty pit. The final
//! board is printed as JSON.
//!
//! Usage:
//!   mancala --player1 Alice --player2 Bob

use anyhow::Context;
use clap::Parser;
use mancala_adapter::InMemoryGameRepository;
use mancala_domain::SowingService;
use mancala_usecase::{
    CreateGame, CreateGameInput, GetGame, GetGameInput, PlayGame, PlayGameInput,
};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "mancala")]
#[command(about = "Two-player stone-sowing board game engine")]
#[command(version)]
struct Cli {
    /// Name of the first player (owns row 1)
    #[arg(long, default_value = "Player1")]
    player1: String,

    /// Name of the second player (owns row 2)
    #[arg(long, default_value = "Player2")]
    player2: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Dependency injection: one store, shared by every use case.
    let repository = InMemoryGameRepository::new();
    let mut create_game = CreateGame::new(repository.clone());
    let get_game = GetGame::new(repository.clone());
    let mut play_game = PlayGame::new(SowingService::new(), repository);

    // The orchestrator allocates the fresh game id.
    let game_id = Uuid::new_v4().to_string();
    create_game
        .start(CreateGameInput {
            game_id: game_id.clone(),
            player1: cli.player1,
            player2: cli.player2,
        })
        .context("failed to create the game")?;

    info!(%game_id, "game created, playing it out");

    // Self-play: alternate players, always the first non-empty pit.
    let mut player_index = 0;
    let mut moves = 0;
    loop {
        let snapshot = get_game.get(GetGameInput {
            game_id: game_id.clone(),
        })?;
        if snapshot.status == "ENDED" {
            break;
        }

        let row = &snapshot.board.rows[player_index];
        let pit_index = row.pits[..6]
            .iter()
            .position(|&stones| stones > 0)
            .context("an in-progress game must have a sowable pit")?;

        play_game.play(PlayGameInput {
            game_id: game_id.clone(),
            player_index,
            pit_index,
        })?;

        moves += 1;
        player_index = 1 - player_index;
    }

    let final_snapshot = get_game.get(GetGameInput { game_id })?;
    info!(moves, "game over");
    println!("{}", serde_json::to_string_pretty(&final_snapshot)?);
    Ok(())
}
