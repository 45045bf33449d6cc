//! Promptdeck Core - Foundational types for the promptdeck prompt generator
//!
//! This crate provides the types all other promptdeck crates depend on:
//! - `Category` - The fixed set of design-output kinds
//! - `PromptInputs`, `GeneratedResult` - The brief and its generated artifact
//! - Error types and Result alias

mod category;
mod error;
mod inputs;
mod result;

pub use category::{AspectRatio, Category, NotebookFormat};
pub use error::{DeckError, Result};
pub use inputs::{DetailSuggestions, PromptInputs, VariantCount};
pub use result::GeneratedResult;
