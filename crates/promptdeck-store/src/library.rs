//! File-backed library of generated results

use promptdeck_core::{Category, GeneratedResult, PromptInputs};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Hard cap on stored results; the oldest entry is evicted past this
pub const MAX_ENTRIES: usize = 50;

/// JSON-array library store, most recent first
pub struct LibraryStore {
    path: PathBuf,
}

/// On-disk entry shape, tolerating the legacy single-string prompt field
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: String,
    category: Category,
    original_inputs: PromptInputs,
    prompts: PromptsField,
    #[serde(default)]
    image_url: Option<String>,
    created_at: u64,
}

/// Older artifacts persisted one prompt as a bare string
#[derive(Deserialize)]
#[serde(untagged)]
enum PromptsField {
    Many(Vec<String>),
    One(String),
}

impl StoredEntry {
    fn normalize(self) -> GeneratedResult {
        GeneratedResult {
            id: self.id,
            category: self.category,
            original_inputs: self.original_inputs,
            prompts: match self.prompts {
                PromptsField::Many(prompts) => prompts,
                PromptsField::One(prompt) => vec![prompt],
            },
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}

impl LibraryStore {
    /// Create a store at an explicit path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default library location: `~/.promptdeck/library.json`
    pub fn default_store() -> Self {
        let path = dirs::home_dir()
            .map(|h| h.join(".promptdeck").join("library.json"))
            .unwrap_or_else(|| PathBuf::from(".promptdeck/library.json"));
        Self::new(path)
    }

    /// The persisted collection, most recent first. Any read or parse
    /// failure yields an empty collection, never an error.
    pub fn list(&self) -> Vec<GeneratedResult> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<StoredEntry>>(&content) {
            Ok(entries) => entries.into_iter().map(StoredEntry::normalize).collect(),
            Err(e) => {
                eprintln!("warning: library file unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Insert or update a result. An existing id is replaced in place
    /// (position kept); a new one goes to the front, evicting the tail
    /// past the cap. A write failure is reported and swallowed.
    pub fn upsert(&self, result: GeneratedResult) {
        let mut entries = self.list();
        match entries.iter().position(|e| e.id == result.id) {
            Some(index) => entries[index] = result,
            None => {
                entries.insert(0, result);
                entries.truncate(MAX_ENTRIES);
            }
        }
        self.write(&entries);
    }

    /// Remove an entry by id. Removing an unknown id is a no-op. Returns
    /// the updated collection.
    pub fn remove(&self, id: &str) -> Vec<GeneratedResult> {
        let mut entries = self.list();
        entries.retain(|e| e.id != id);
        self.write(&entries);
        entries
    }

    /// Drop the whole library
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                eprintln!("warning: failed to clear library: {}", e);
            }
        }
    }

    fn write(&self, entries: &[GeneratedResult]) {
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string(entries)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(&self.path, content)
        })();
        if let Err(e) = result {
            // Caller state is not rolled back on a failed write
            eprintln!("warning: failed to save library: {}", e);
        }
    }
}
