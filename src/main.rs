use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use garden::GardenConfig;

mod cli;
use cli::commands::{self, SearchSource};
use cli::{Cli, Commands};

/// Log filter variable; `GARDEN_LOG=garden=debug` shows per-file loading.
const LOG_ENV: &str = "GARDEN_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("garden=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<GardenConfig> {
    let mut config = GardenConfig::load(&cli.config)?;
    if let Some(content) = &cli.content {
        config.content_dir = content.clone();
    }
    if let Some(url) = &cli.site_url {
        config.site_url = url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Build {
            output,
            prebuilt_index,
        } => {
            let out_dir = output.unwrap_or_else(|| config.output_dir.clone());
            commands::run_build(&config, &out_dir, prebuilt_index)
        }
        Commands::Search {
            query,
            limit,
            snapshot,
            index,
        } => {
            let source = match (&snapshot, &index) {
                (Some(path), _) => SearchSource::Snapshot(path),
                (None, Some(path)) => SearchSource::Prebuilt(path),
                (None, None) => SearchSource::Content,
            };
            let limit = limit.unwrap_or(config.search_limit);
            commands::run_search(&config, &query, limit, source)
        }
        Commands::Related { slug, limit } => {
            let limit = limit.unwrap_or(config.related_limit);
            commands::run_related(&config, &slug, limit)
        }
        Commands::Tags => commands::run_tags(&config),
        Commands::Toc { slug } => commands::run_toc(&config, &slug),
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
