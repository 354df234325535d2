//! jsonkv CLI
//!
//! Command-line interface for inspecting and editing a jsonkv store file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jsonkv::{Config, Store, Value};
use tracing_subscriber::{fmt, EnvFilter};

/// jsonkv CLI
#[derive(Parser, Debug)]
#[command(name = "jsonkv-cli")]
#[command(about = "CLI for jsonkv key-value store files")]
#[command(version)]
struct Args {
    /// Store file
    #[arg(short, long, default_value = "./jsonkv.json")]
    file: PathBuf,

    /// Write indented JSON
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set (parsed as JSON, otherwise stored as text)
        value: String,
    },

    /// Delete a key
    Rm {
        /// The key to delete
        key: String,
    },

    /// Append text to a text value
    Append {
        /// The key holding the text
        key: String,

        /// Text to append
        text: String,
    },

    /// List all keys as a JSON array
    Keys,

    /// Remove every key
    Destroy,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,jsonkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .path(args.file.clone())
        .pretty(args.pretty)
        .build();

    let mut store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut store, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(store: &mut Store, command: Commands) -> jsonkv::Result<()> {
    match command {
        Commands::Get { key } => {
            let value = store.get(&key).cloned().unwrap_or_default();
            print_json(&value)?;
        }
        Commands::Set { key, value } => {
            store.set(key, parse_value(&value))?;
        }
        Commands::Rm { key } => {
            store.remove(&key)?;
        }
        Commands::Append { key, text } => {
            store.append(&key, &text)?;
        }
        Commands::Keys => {
            print_json(&Value::from(store.keys()))?;
        }
        Commands::Destroy => {
            tracing::info!("Destroying {} keys in {}", store.len(), store.path().display());
            store.destroy()?;
        }
    }
    Ok(())
}

/// Interpret a command-line value as JSON, falling back to plain text
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

fn print_json(value: &Value) -> jsonkv::Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn to_json(value: &Value) -> jsonkv::Result<String> {
    serde_json::to_string(value).map_err(|e| jsonkv::JsonKvError::Encode(e.to_string()))
}
