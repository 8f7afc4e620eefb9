use std::{io, process::ExitCode, time::Duration};

use champdex::{
    config::{DEFAULT_BASE_URL, DEFAULT_LOCALE},
    model::{ids::ChampionId, item::ItemCategory},
    service::gameapi::transport::ClientInitError,
    ui::{print_lines, views::*},
    ClientConfig, DataManager,
};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Champion roster browser backed by Data Dragon
#[derive(Parser, Debug)]
#[command(name = "champdex")]
#[command(version, about, long_about = None)]
struct Args {
    /// Data Dragon base URL
    #[arg(long, env = "CHAMPDEX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Locale used for data documents
    #[arg(long, env = "CHAMPDEX_LOCALE", default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Request timeout in seconds (HTTP client default when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the newest content version
    Version,
    /// List all champions
    Champions,
    /// Show lore, stats, abilities and skins of one champion
    Champion { id: String },
    /// List shop items by category
    Items {
        /// Only show one category (starter, basic, epic, legendary, mythic, boots, consumable, trinket)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<ItemCategory>,
    },
    /// Show the recommended build for a champion
    Build { id: String },
}

fn parse_category(name: &str) -> Result<ItemCategory, String> {
    ItemCategory::from_name(name).ok_or_else(|| format!("unknown item category: {}", name))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error occured: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = ClientConfig {
        base_url: args.base_url,
        locale: args.locale,
        timeout: args.timeout.map(Duration::from_secs),
        ..ClientConfig::default()
    };
    let manager = DataManager::new(config)?;

    let lines = match args.command {
        Command::Version => version_view(&manager.latest_version()),
        Command::Champions => champion_list_view(&manager.all_champions()),
        Command::Champion { id } => champion_detail_view(&manager.champion_details(&ChampionId::from(id))),
        Command::Items { category } => item_categories_view(&manager.categorized_items(), category),
        Command::Build { id } => {
            let id = ChampionId::from(id);
            build_view(&id, &manager.recommended_build(&id), &manager.all_items())
        }
    };

    print_lines(&lines)?;
    Ok(())
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Client initialization error: {0}")]
    ClientInit(#[from] ClientInitError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
