use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabglide_core::AppConfig;

mod app;
mod commands;

use app::Screen;

#[derive(Parser)]
#[command(name = "tabglide")]
#[command(author, version, about = "Swipeable tab navigation for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo gallery
    Run {
        /// Demo screen to open
        #[arg(short = 's', long, value_enum, default_value_t = Screen::Top)]
        screen: Screen,
    },
    /// Write the default configuration file
    InitConfig,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run { screen }) => commands::run::run(config, screen),
        None => commands::run::run(config, Screen::Top),
        Some(Commands::InitConfig) => commands::init_config::run(&config),
    }
}
