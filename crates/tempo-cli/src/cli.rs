//! Command-line interface definition for the `tpo` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tempo_core::relation::Relation;

/// Top-level CLI parser for the `tpo` binary.
#[derive(Debug, Parser)]
#[command(name = "tpo", version, about = "Tempo - temporal annotation client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides configuration)
    #[arg(long, global = true)]
    pub backend: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate annotation documents before upload.
    Validate(ValidateArgs),
    /// Detect temporal entities in a text.
    Entities(EntitiesArgs),
    /// Annotation session operations.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Temporal game operations.
    Game {
        #[command(subcommand)]
        action: GameCommands,
    },
    /// Compute the temporal closure of a document's asserted relations.
    Closure(ClosureArgs),
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Documents to validate (.json or .txt).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EntitiesArgs {
    /// Read the text from a file.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Pass the text directly.
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommands {
    /// Create a session from a validated document.
    Create {
        /// Document file (.json or .txt).
        file: PathBuf,
    },
    /// Assert a relation at a board position.
    Step {
        #[arg(long)]
        session_id: String,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        /// Relation: <, >, =, - or before/after/equal/unknown.
        #[arg(long, value_parser = parse_relation)]
        relation: Relation,
    },
    /// Undo the most recent step.
    Undo {
        #[arg(long)]
        session_id: String,
    },
    /// Print the session's annotations.
    Results {
        #[arg(long)]
        session_id: String,
    },
    /// Write the session's annotations as an export document.
    Export {
        #[arg(long)]
        session_id: String,
        /// Output path (defaults to the configured export directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum GameCommands {
    /// Start a new game.
    New {
        /// Difficulty level (number of entities), 2 to 5.
        #[arg(long, default_value_t = 3)]
        level: u8,
    },
    /// Play one move.
    Step {
        #[arg(long)]
        game_id: String,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        /// Relation: <, >, =, - or before/after/equal/unknown.
        #[arg(long, value_parser = parse_relation)]
        relation: Relation,
    },
    /// Undo the most recent move.
    Undo {
        #[arg(long)]
        game_id: String,
    },
}

#[derive(Debug, Args)]
pub struct ClosureArgs {
    /// Document file with a `relations` array of
    /// `{source, target, relation}` triples.
    pub file: PathBuf,
}

/// Accept a relation as its wire symbol or its name, case-insensitively.
fn parse_relation(raw: &str) -> Result<Relation, String> {
    if let Some(relation) = Relation::from_symbol(raw) {
        return Ok(relation);
    }
    match raw.to_lowercase().as_str() {
        "after" => Ok(Relation::After),
        "before" => Ok(Relation::Before),
        "equal" => Ok(Relation::Equal),
        "unknown" => Ok(Relation::Unknown),
        _ => Err(format!(
            "unknown relation '{raw}' (expected <, >, =, - or before/after/equal/unknown)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, SessionCommands};
    use tempo_core::relation::Relation;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn step_accepts_symbol_relations() {
        let cli = Cli::try_parse_from([
            "tpo",
            "session",
            "step",
            "--session-id",
            "s-1",
            "--row",
            "0",
            "--col",
            "2",
            "--relation",
            "<",
        ])
        .expect("cli should parse");

        let Commands::Session {
            action: SessionCommands::Step { relation, row, col, .. },
        } = cli.command
        else {
            panic!("expected session step");
        };
        assert_eq!(relation, Relation::Before);
        assert_eq!((row, col), (0, 2));
    }

    #[test]
    fn step_accepts_named_relations() {
        let cli = Cli::try_parse_from([
            "tpo",
            "game",
            "step",
            "--game-id",
            "g-1",
            "--row",
            "1",
            "--col",
            "3",
            "--relation",
            "Equal",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Game { .. }));
    }

    #[test]
    fn bogus_relation_is_rejected() {
        let parsed = Cli::try_parse_from([
            "tpo",
            "session",
            "step",
            "--session-id",
            "s-1",
            "--row",
            "0",
            "--col",
            "2",
            "--relation",
            "sideways",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tpo", "game", "new", "--level", "4", "--verbose"])
            .expect("cli should parse");
        assert!(cli.verbose);
    }
}
