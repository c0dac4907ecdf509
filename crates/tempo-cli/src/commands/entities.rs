//! Entity detection command.

use anyhow::Context;

use tempo_config::TempoConfig;
use tempo_core::entity::Entity;
use tempo_core::tags::add_tags;

use crate::cli::EntitiesArgs;
use crate::commands::{client, to_json};

pub async fn run(args: &EntitiesArgs, config: &TempoConfig) -> anyhow::Result<()> {
    let text = match (&args.file, &args.text) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, Some(text)) => text.clone(),
        (None, None) => anyhow::bail!("pass the text via --file or --text"),
    };

    let spans = client(config).annotate_entities(&text).await?;
    let entities: Vec<Entity> = spans
        .iter()
        .enumerate()
        .map(|(index, span)| Entity::from_span(index, span))
        .collect();

    println!("{}", add_tags(&text, &entities));
    println!("{}", to_json(&spans, config)?);
    Ok(())
}
