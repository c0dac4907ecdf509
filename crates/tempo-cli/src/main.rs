use clap::Parser;

mod cli;
mod commands;
mod render;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tpo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = tempo_config::TempoConfig::load_with_dotenv()?;
    if let Some(backend) = &cli.backend {
        config.backend.base_url.clone_from(backend);
    }

    match cli.command {
        cli::Commands::Validate(args) => commands::validate::run(&args),
        cli::Commands::Entities(args) => commands::entities::run(&args, &config).await,
        cli::Commands::Session { action } => commands::session::run(action, &config).await,
        cli::Commands::Game { action } => commands::game::run(action, &config).await,
        cli::Commands::Closure(args) => commands::closure::run(&args, &config).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TEMPO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
