use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::store;

mod character;
mod output;
mod roll;

#[derive(Parser)]
#[command(name = "p2roll")]
#[command(about = "Character roster and d20 roll calculator")]
struct Cli {
    /// Path to the roster file (defaults to $HOME/.p2roll)
    #[arg(long, short = 'C', global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Manage characters in the game
    #[command(visible_alias = "char")]
    Character {
        #[command(subcommand)]
        cmd: character::CharacterCmd,
    },
    /// Roll dice for characters
    Roll(roll::RollCmd),
}

fn main() {
    if let Err(err) = run() {
        output::fail(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = match cli.config {
        Some(path) => path,
        None => default_roster_path()?,
    };
    let mut roster = store::load(&path)?;

    match cli.cmd {
        Cmd::Character { cmd } => character::run(cmd, &mut roster, &path),
        Cmd::Roll(cmd) => roll::run(cmd, &roster),
    }
}

fn default_roster_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("no --config given and HOME is not set")?;
    Ok(PathBuf::from(home).join(".p2roll"))
}
