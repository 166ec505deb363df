use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use redux_collections::config::{ExtensionRegistry, StoreConfig};
use redux_collections::{Action, Store};

#[derive(Debug, Parser)]
#[command(name = "redux-collections", version, about = "Replay actions against collection and map reducers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a JSON-lines action log and print the final state
    Replay {
        /// Reducer config file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// File with one JSON action per line
        actions: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    redux_collections::init_tracing();

    match Cli::parse().command {
        Command::Replay { config, actions } => {
            let config = match config {
                Some(path) => StoreConfig::load_from(&path),
                None => StoreConfig::load(),
            }
            .context("Failed to load reducer config")?;

            let mut store = config.build(&ExtensionRegistry::new())?;
            replay(&mut store, &actions)?;
            println!("{}", serde_json::to_string_pretty(store.state())?);
        }
    }

    Ok(())
}

fn replay(store: &mut Store, path: &Path) -> anyhow::Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read action log '{}'", path.display()))?;

    let actions = parse_actions(&content)
        .with_context(|| format!("Invalid action log '{}'", path.display()))?;

    tracing::info!(count = actions.len(), "replaying actions");
    for action in &actions {
        store.dispatch(action);
    }
    Ok(())
}

fn parse_actions(content: &str) -> anyhow::Result<Vec<Action>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Action>(line).with_context(|| format!("line {}", index + 1))
        })
        .collect()
}
