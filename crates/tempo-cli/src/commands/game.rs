//! Temporal game commands.

use tempo_board::board::Board;
use tempo_client::wire::StepAction;
use tempo_config::TempoConfig;
use tempo_core::relation::Relation;

use crate::cli::GameCommands;
use crate::commands::client;
use crate::render::render_board;

pub async fn run(action: GameCommands, config: &TempoConfig) -> anyhow::Result<()> {
    match action {
        GameCommands::New { level } => new(level, config).await,
        GameCommands::Step {
            game_id,
            row,
            col,
            relation,
        } => step(&game_id, row, col, relation, config).await,
        GameCommands::Undo { game_id } => undo(&game_id, config).await,
    }
}

async fn new(level: u8, config: &TempoConfig) -> anyhow::Result<()> {
    let resp = client(config).new_game(level).await?;
    let board = Board::from_wire(&resp.board, resp.endpoints.clone())?;

    println!("game: {} (level {})", resp.game_id, resp.level);
    println!("{}", resp.text);
    print!("{}", render_board(&board));
    Ok(())
}

async fn step(
    game_id: &str,
    row: usize,
    col: usize,
    relation: Relation,
    config: &TempoConfig,
) -> anyhow::Result<()> {
    let resp = client(config)
        .game_step(game_id, StepAction::new(row, col, relation))
        .await?;
    let board = Board::from_wire(&resp.board, resp.endpoints.clone())?;

    println!("reward: {}", resp.reward);
    print!("{}", render_board(&board));

    if resp.terminated {
        println!(
            "game over: {}",
            if resp.is_success { "success" } else { "failed" }
        );
        if let Some(matrix) = &resp.true_board {
            let reference = Board::from_wire(matrix, board.endpoints().to_vec())?;
            let mismatches = board.mismatches(&reference)?;
            println!("reference board:");
            print!("{}", render_board(&reference));
            for m in &mismatches {
                println!(
                    "mismatch at ({}, {}): annotated {} but reference is {}",
                    m.row,
                    m.col,
                    m.annotated.name(),
                    m.reference.name(),
                );
            }
        }
    }
    Ok(())
}

async fn undo(game_id: &str, config: &TempoConfig) -> anyhow::Result<()> {
    let resp = client(config).game_undo(game_id).await?;
    let board = Board::from_wire(&resp.board, resp.endpoints.clone())?;

    // The cumulative reward is preserved across undo.
    println!("undone; reward stays at {}", resp.reward);
    print!("{}", render_board(&board));
    Ok(())
}
