//! API key management commands

use anyhow::{Context, Result};
use clap::Subcommand;
use promptdeck_gen::{parse_key_list, ConfigStore};
use std::io::Read;

#[derive(Subcommand)]
pub enum KeysCommands {
    /// Store an API key list, one key per line (from a file or stdin)
    Set {
        /// File holding the key list; omit to read from stdin
        #[arg(long)]
        file: Option<String>,
    },

    /// List stored keys (masked)
    List,
}

pub fn run(cmd: KeysCommands) -> Result<()> {
    let store = ConfigStore::default_store();
    match cmd {
        KeysCommands::Set { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read keys from stdin")?;
                    buf
                }
            };
            let keys = parse_key_list(&raw);
            let count = keys.len();
            store.save_keys(keys)?;
            println!(
                "Stored {} key(s). On quota exhaustion the next key in the list is tried automatically",
                count
            );
        }
        KeysCommands::List => {
            let config = store.load()?;
            if config.api_keys.is_empty() {
                println!("No keys stored (the PROMPTDECK_API_KEY env var is used as fallback)");
                return Ok(());
            }
            for (i, key) in config.api_keys.iter().enumerate() {
                println!("{}. {}", i + 1, mask(key));
            }
        }
    }
    Ok(())
}

fn mask(key: &str) -> String {
    if key.len() <= 8 {
        return "*".repeat(key.len());
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("short"), "*****");
        assert_eq!(mask("AIzaSyExampleKey1234"), "AIza...1234");
    }
}
