use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "journal-archive",
    version,
    about = "Browse and list a journal's article archive"
)]
pub struct Cli {
    /// Article data file or http(s) URL, overrides the config file
    #[arg(short, long, value_name = "SOURCE", global = true)]
    pub data: Option<String>,

    /// Config file to use instead of ~/.config/journal-archive/config.toml
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive archive browser (default)
    Browse,
    /// Print the volume archive, newest volume first
    Archive {
        /// Only show volumes published in this year
        #[arg(long)]
        year: Option<i32>,
        /// Only show this volume number
        #[arg(long)]
        volume: Option<u32>,
        /// List the articles of every shown volume
        #[arg(long)]
        expand_all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the most recently published articles
    Latest {
        /// How many articles to show, defaults to the configured count
        #[arg(short = 'n', long)]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Print one page of the current issue
    Issue {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        json: bool,
    },
}
