//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use yap_core::config::Config;
use yap_core::{interrupt, logging};

mod commands;

#[derive(Parser)]
#[command(name = "yap")]
#[command(version)]
#[command(about = "Hear Me Yap, the landing page, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fix the particle layout (same seed, same field)
    #[arg(long, global = true, env = "YAP_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play the typewriter phrases on stdout
    Type {
        /// Stop after this many full passes over the phrases
        #[arg(long, value_name = "N")]
        cycles: Option<u32>,

        /// Delay between typed characters, in milliseconds
        #[arg(long, value_name = "MS")]
        speed: Option<u64>,

        /// Delay a finished phrase stays on screen, in milliseconds
        #[arg(long, value_name = "MS")]
        pause: Option<u64>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write the default config file
    Init,
    /// Print the default config with all values filled in
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init()?;

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, seed } = cli;

    if let Some(Commands::Config { command }) = command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        };
    }

    let mut config = Config::load().context("load config")?;
    if seed.is_some() {
        config.particles.seed = seed;
    }
    let _log_guard = logging::init(&config.log).context("init logging")?;

    match command {
        None => commands::landing::run(&config),
        Some(Commands::Type {
            cycles,
            speed,
            pause,
        }) => {
            commands::typewriter::run(
                &config,
                commands::typewriter::TypeOptions {
                    cycles,
                    speed_ms: speed,
                    pause_ms: pause,
                },
            )
            .await
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}
