// src/main.rs

use clap::Parser;
use goling::cli::{Cli, Commands};
use goling::commands;
use goling::config::{default_config_path, Config};
use goling::Result;
use tracing_subscriber::EnvFilter;

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    // 日志输出到 stderr，stdout 只留给命令结果
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Init => commands::handle_init(&config),
        Commands::New {
            message,
            place,
            tags,
            lat,
            lon,
            no_location,
        } => commands::handle_new(&config, message, place, tags, lat, lon, no_location),
        Commands::List => commands::handle_list(&config),
        Commands::Feed { num } => commands::handle_feed(&config, num),
        Commands::Show { id } => commands::handle_show(&config, &id),
        Commands::Map => commands::handle_map(&config),
        Commands::Stats => commands::handle_stats(&config),
        Commands::Export => commands::handle_export(&config),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
