//! Annotation session commands.
//!
//! Each invocation is one request; the session itself lives server-side,
//! addressed by the id `create` prints. The board printed after every
//! mutating call is the server's closure-updated copy, rendered whole.

use anyhow::Context;
use std::path::{Path, PathBuf};

use tempo_board::board::Board;
use tempo_client::wire::StepAction;
use tempo_config::TempoConfig;
use tempo_core::dct::apply_dct;
use tempo_core::export::ExportDocument;
use tempo_core::relation::Relation;
use tempo_core::upload::validate_upload;

use crate::cli::SessionCommands;
use crate::commands::{client, to_json};
use crate::render::render_board;

pub async fn run(action: SessionCommands, config: &TempoConfig) -> anyhow::Result<()> {
    match action {
        SessionCommands::Create { file } => create(&file, config).await,
        SessionCommands::Step {
            session_id,
            row,
            col,
            relation,
        } => step(&session_id, row, col, relation, config).await,
        SessionCommands::Undo { session_id } => undo(&session_id, config).await,
        SessionCommands::Results { session_id } => results(&session_id, config).await,
        SessionCommands::Export { session_id, output } => {
            export(&session_id, output, config).await
        }
    }
}

async fn create(file: &Path, config: &TempoConfig) -> anyhow::Result<()> {
    let name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let validation = validate_upload(name, &content);
    if !validation.is_valid() {
        for error in &validation.errors {
            eprintln!("  - {error}");
        }
        anyhow::bail!("{} failed validation", file.display());
    }
    let document = validation.document.expect("valid uploads carry a document");

    // Fold the creation time in before the session sees the document.
    let (text, entities) = match &document.dct {
        Some(dct) => {
            let normalized = apply_dct(&document.text, &document.entities, dct)?;
            (normalized.text, normalized.entities)
        }
        None => (document.text, document.entities),
    };

    let resp = client(config)
        .new_annotation_session(&text, &entities, document.dct.as_deref())
        .await?;
    let board = Board::from_wire(&resp.board, resp.endpoints.clone())?;

    println!("session: {}", resp.session_id);
    println!("pairs to annotate: {}", resp.n_relations);
    print!("{}", render_board(&board));
    Ok(())
}

async fn step(
    session_id: &str,
    row: usize,
    col: usize,
    relation: Relation,
    config: &TempoConfig,
) -> anyhow::Result<()> {
    let resp = client(config)
        .annotation_step(session_id, StepAction::new(row, col, relation))
        .await?;
    let board = Board::from_wire(&resp.board, resp.endpoints.clone())?;

    if resp.has_incoherence {
        eprintln!("warning: the annotated relations are temporally incoherent");
    }
    println!(
        "annotated {} of {} pairs",
        resp.n_annotated,
        resp.n_relations
            .map_or_else(|| "?".to_string(), |n| n.to_string()),
    );
    print!("{}", render_board(&board));
    Ok(())
}

async fn undo(session_id: &str, config: &TempoConfig) -> anyhow::Result<()> {
    let resp = client(config).annotation_undo(session_id).await?;
    let board = Board::from_wire(&resp.board, resp.endpoints.clone())?;

    println!("undone; {} pair(s) annotated", resp.n_annotated);
    print!("{}", render_board(&board));
    Ok(())
}

async fn results(session_id: &str, config: &TempoConfig) -> anyhow::Result<()> {
    let resp = client(config).annotation_results(session_id).await?;
    println!("{}", to_json(&resp, config)?);
    Ok(())
}

async fn export(
    session_id: &str,
    output: Option<PathBuf>,
    config: &TempoConfig,
) -> anyhow::Result<()> {
    let resp = client(config).annotation_results(session_id).await?;

    // The results echo the document as annotated: DCT-normalized when a
    // creation time was supplied. The export translates back.
    let export = ExportDocument::from_annotated(
        None,
        &resp.text,
        &resp.entities,
        resp.dct.as_deref(),
    )?;

    let path = output.unwrap_or_else(|| {
        PathBuf::from(&config.general.export_dir).join(format!("annotation-{session_id}.json"))
    });
    std::fs::write(&path, to_json(&export, config)?)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "wrote {} ({} entities, {} relations)",
        path.display(),
        export.total_entities,
        resp.total_relations,
    );
    Ok(())
}
