//! Promptdeck Store - Persistent library of generated results
//!
//! A capacity-bounded, upsert-by-id collection serialized as a JSON
//! array, most-recently-created first.

mod library;

pub use library::{LibraryStore, MAX_ENTRIES};
