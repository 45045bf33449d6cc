//! Generated artifacts

use crate::category::Category;
use crate::inputs::PromptInputs;
use serde::{Deserialize, Serialize};

/// A persisted generation result: the brief snapshot plus its prompt variants
///
/// Once handed to the library store, the store's copy is authoritative;
/// callers that mutate a working copy (e.g. attach a preview image) must
/// re-upsert it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    /// Stable unique identifier, assigned at creation
    pub id: String,
    pub category: Category,
    /// Immutable snapshot of the brief that produced this result
    pub original_inputs: PromptInputs,
    /// Ordered variants; variant 1 hews closest to the literal brief
    pub prompts: Vec<String>,
    /// Attached later by the preview step, absent until requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Unix epoch milliseconds at creation; never updated afterwards
    pub created_at: u64,
}

impl GeneratedResult {
    /// Create a new result with a fresh id and the current timestamp
    pub fn new(category: Category, inputs: PromptInputs, prompts: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            original_inputs: inputs,
            prompts,
            image_url: None,
            created_at: now_millis(),
        }
    }
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
