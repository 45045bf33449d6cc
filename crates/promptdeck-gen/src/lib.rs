//! Promptdeck Gen - The request-orchestration engine
//!
//! Turns a design brief into a schema-constrained generation request,
//! executes it against a pool of interchangeable API keys with automatic
//! rotation on quota exhaustion, and normalizes the model's response.

pub mod client;
pub mod config;
pub mod executor;
pub mod pool;
pub mod quota;
pub mod request;
pub mod response;
pub mod service;

pub use client::{Content, GeminiClient, GenerateContentRequest, GenerateContentResponse, Part};
pub use config::{parse_key_list, ConfigStore, DeckConfig};
pub use executor::execute_with_failover;
pub use pool::CredentialPool;
pub use quota::QuotaClassifier;
pub use request::{build_request, GenerationRequest};
pub use service::GenerationService;
