mod browser;
mod cli;
mod loader;
mod render;

use anyhow::Result;
use clap::Parser;
use journal_archive_config::Config;
use journal_archive_engine::{ArchiveFilter, ArchiveSession};
use std::process;

use cli::{Cli, Command};
use loader::{LoadSettings, load_session};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    // Determine the data source from CLI args or config file
    let config = match (loaded, cli.data.as_deref()) {
        (Ok(Some(config)), Some(data)) => Config {
            data_source: Config::expand_source(data),
            ..config
        },
        (Ok(None), Some(data)) => Config::new(Config::expand_source(data)),
        (Err(e), Some(data)) => {
            log::warn!("Ignoring config file: {e}");
            Config::new(Config::expand_source(data))
        }
        (Ok(Some(config)), None) => {
            log::info!("Loaded data source from config: {}", config.data_source);
            config
        }
        (Ok(None), None) => {
            eprintln!("Error: No data source provided and no config file found");
            eprintln!("Usage: journal-archive --data <data-file-or-url> [COMMAND]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        (Err(e), None) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: journal-archive --data <data-file-or-url> [COMMAND]");
            process::exit(1);
        }
    };

    let session = match load_session(&LoadSettings::from_config(&config)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!(
                "Error: Could not load articles from '{}': {e}",
                config.data_source
            );
            process::exit(1);
        }
    };

    run_command(cli.command.unwrap_or(Command::Browse), session, &config)
}

fn run_command(command: Command, mut session: ArchiveSession, config: &Config) -> Result<()> {
    match command {
        Command::Browse => browser::run(session),
        Command::Archive {
            year,
            volume,
            expand_all,
            json,
        } => {
            session.set_filter(ArchiveFilter::all().with_year(year).with_volume(volume));
            if expand_all {
                session.expand_all();
            }
            let view = session.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_lines(render::archive_lines(&view, &session.stats()));
            }
            Ok(())
        }
        Command::Latest { count, json } => {
            let cards = session.latest(count.unwrap_or(config.latest_count));
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                print_lines(render::latest_lines(&cards));
            }
            Ok(())
        }
        Command::Issue { page, json } => {
            let view = session.issue_page(page, config.page_size);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_lines(render::issue_lines(&view));
            }
            Ok(())
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
