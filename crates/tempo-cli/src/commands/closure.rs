//! Legacy client-side closure command.
//!
//! Builds the client-owned board from a document, asserts the document's
//! relation triples, asks the backend for the temporal closure, and
//! re-projects the result. Triples that map onto no valid cell in either
//! orientation are reported, not fatal.

use anyhow::Context;
use serde::Deserialize;

use tempo_board::closure::{TimelineRelation, apply_closure};
use tempo_board::local::LocalBoard;
use tempo_config::TempoConfig;
use tempo_core::upload::validate_json;

use crate::cli::ClosureArgs;
use crate::commands::client;
use crate::render::render_board;

#[derive(Deserialize)]
struct AssertedRelations {
    #[serde(default)]
    relations: Vec<TimelineRelation>,
}

pub async fn run(args: &ClosureArgs, config: &TempoConfig) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let validation = validate_json(&content);
    if !validation.is_valid() {
        for error in &validation.errors {
            eprintln!("  - {error}");
        }
        anyhow::bail!("{} failed validation", args.file.display());
    }
    let document = validation.document.expect("valid uploads carry a document");
    let asserted: AssertedRelations = serde_json::from_str(&content)
        .with_context(|| format!("bad relations array in {}", args.file.display()))?;

    let mut board = LocalBoard::new(&document.entities)?;
    let local = apply_closure(&mut board, &asserted.relations);
    if !local.dropped.is_empty() {
        eprintln!(
            "warning: {} asserted relation(s) do not map onto the board",
            local.dropped.len()
        );
    }

    let outcome = client(config).close_local_board(&mut board).await?;
    println!(
        "closure wrote {} cell(s), dropped {}",
        outcome.written,
        outcome.dropped.len()
    );
    for triple in &outcome.dropped {
        eprintln!(
            "  dropped: {} {} {}",
            triple.source, triple.relation, triple.target
        );
    }
    print!("{}", render_board(&board.snapshot()));
    Ok(())
}
