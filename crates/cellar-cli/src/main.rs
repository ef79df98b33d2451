mod cli;
mod commands;

use anyhow::Result;
use cellar_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing; stdout may carry CSV
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Clean {
            input,
            output,
            schema,
            workers,
        } => commands::clean::handle(input, output, schema.map(Into::into), workers, &config),
        cli::Commands::Inspect { message, json } => {
            commands::inspect::handle(message, json, &config)
        }
        cli::Commands::Patterns => commands::patterns::handle(),
        cli::Commands::Config => commands::config::handle(cli.config.as_deref(), &config),
    }
}
