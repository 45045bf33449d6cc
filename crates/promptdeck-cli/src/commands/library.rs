//! Library commands

use anyhow::{bail, Result};
use clap::Subcommand;
use promptdeck_store::LibraryStore;

#[derive(Subcommand)]
pub enum LibraryCommands {
    /// List saved results, most recent first
    List,

    /// Show one saved result in full
    Show {
        /// Result id
        id: String,
    },

    /// Remove a saved result
    Remove {
        /// Result id
        id: String,
    },

    /// Remove every saved result
    Clear,
}

pub fn run(cmd: LibraryCommands) -> Result<()> {
    let store = LibraryStore::default_store();
    match cmd {
        LibraryCommands::List => {
            let entries = store.list();
            if entries.is_empty() {
                println!("Library is empty");
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{}  {}  {} variant(s){}  {}",
                    entry.id,
                    entry.category.label(),
                    entry.prompts.len(),
                    if entry.image_url.is_some() {
                        "  [preview]"
                    } else {
                        ""
                    },
                    entry.original_inputs.subject,
                );
            }
            println!("\n{} result(s)", entries.len());
        }
        LibraryCommands::Show { id } => {
            let Some(entry) = store.list().into_iter().find(|e| e.id == id) else {
                bail!("No library entry with id {}", id);
            };
            println!("Id:       {}", entry.id);
            println!("Category: {}", entry.category.label());
            println!("Subject:  {}", entry.original_inputs.subject);
            println!("Created:  {} (epoch ms)", entry.created_at);
            for (i, prompt) in entry.prompts.iter().enumerate() {
                println!("\n--- Variant {} ---\n{}", i + 1, prompt);
            }
            if entry.image_url.is_some() {
                println!("\nA preview image is attached");
            }
        }
        LibraryCommands::Remove { id } => {
            let remaining = store.remove(&id);
            println!("Removed. {} result(s) remain", remaining.len());
        }
        LibraryCommands::Clear => {
            store.clear();
            println!("Library cleared");
        }
    }
    Ok(())
}
