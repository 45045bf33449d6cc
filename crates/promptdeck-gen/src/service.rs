//! Collaborator-facing generation surface
//!
//! Owns the credential pool and routes every operation through the same
//! failover loop. Callers receive normalized results; malformed model
//! output never escapes as an error on the text paths.

use crate::client::{
    Content, GeminiClient, GenerateContentRequest, GenerationConfig, ImageConfig, Part,
};
use crate::config::{ConfigStore, DeckConfig};
use crate::executor::execute_with_failover;
use crate::pool::CredentialPool;
use crate::quota::QuotaClassifier;
use crate::request::{build_request, detail_schema};
use crate::response::{extract_image_data_uri, parse_details, parse_prompts};
use promptdeck_core::{Category, DetailSuggestions, PromptInputs, Result};

/// The orchestration facade: request building, failover execution and
/// response normalization behind four operations.
pub struct GenerationService {
    pool: CredentialPool,
    classifier: QuotaClassifier,
    config: DeckConfig,
    store: ConfigStore,
}

impl GenerationService {
    /// Build a service over the given config store
    pub fn new(store: ConfigStore) -> Result<Self> {
        let config = store.load()?;
        let pool = CredentialPool::load(&config);
        Ok(Self {
            pool,
            classifier: QuotaClassifier::default(),
            config,
            store,
        })
    }

    /// Build a service from explicit parts. Useful for embedders that
    /// manage their own pool, and for tests.
    pub fn from_parts(
        pool: CredentialPool,
        classifier: QuotaClassifier,
        config: DeckConfig,
        store: ConfigStore,
    ) -> Self {
        Self {
            pool,
            classifier,
            config,
            store,
        }
    }

    /// Number of usable credentials
    pub fn key_count(&self) -> usize {
        self.pool.len()
    }

    /// Re-read persisted configuration and swap the pool wholesale.
    /// Invoked after the user edits the key list.
    pub fn reload_credentials(&mut self) -> Result<()> {
        self.config = self.store.load()?;
        self.pool = CredentialPool::load(&self.config);
        Ok(())
    }

    /// Generate prompt variants for a brief
    pub fn generate_prompts(
        &mut self,
        category: Category,
        inputs: &PromptInputs,
    ) -> Result<Vec<String>> {
        inputs.validate()?;
        let request = build_request(category, inputs);

        let wire = GenerateContentRequest {
            contents: vec![Content::text(request.content.as_str())],
            system_instruction: Some(Content::text(request.system_instruction.as_str())),
            generation_config: Some(GenerationConfig {
                // Slightly higher creativity for variations
                temperature: Some(0.8),
                response_mime_type: Some("application/json".into()),
                response_schema: Some(request.response_schema.clone()),
                image_config: None,
            }),
        };

        let api_url = self.config.api_url.clone();
        let model = self.config.text_model.clone();
        let response = execute_with_failover(&mut self.pool, &self.classifier, |key| {
            GeminiClient::new(&api_url, key).generate(&model, &wire)
        })?;

        Ok(parse_prompts(response.text().unwrap_or_default()))
    }

    /// Generate a preview image for a finished prompt. Returns a data URI.
    pub fn generate_preview_image(
        &mut self,
        prompt: &str,
        aspect_ratio: &str,
        reference_image: Option<&str>,
    ) -> Result<String> {
        let parts = preview_parts(prompt, reference_image);
        let wire = GenerateContentRequest {
            contents: vec![Content { parts }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: None,
                response_schema: None,
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                }),
            }),
        };

        let api_url = self.config.api_url.clone();
        let model = self.config.image_model.clone();
        let response = execute_with_failover(&mut self.pool, &self.classifier, |key| {
            GeminiClient::new(&api_url, key).generate(&model, &wire)
        })?;

        extract_image_data_uri(&response)
    }

    /// Suggest design details for a bare subject. An empty subject yields
    /// the empty suggestion set without a network call.
    pub fn suggest_details(
        &mut self,
        subject: &str,
        category_label: &str,
    ) -> Result<DetailSuggestions> {
        if subject.trim().is_empty() {
            return Ok(DetailSuggestions::default());
        }

        let wire = GenerateContentRequest {
            contents: vec![Content::text(format!(
                "Suggest graphic design details for a \"{}\" publication on the subject: \"{}\".",
                category_label, subject
            ))],
            system_instruction: Some(Content::text(
                "You are a creative director. Return valid JSON.",
            )),
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: Some("application/json".into()),
                response_schema: Some(detail_schema()),
                image_config: None,
            }),
        };

        let api_url = self.config.api_url.clone();
        let model = self.config.text_model.clone();
        let response = execute_with_failover(&mut self.pool, &self.classifier, |key| {
            GeminiClient::new(&api_url, key).generate(&model, &wire)
        })?;

        Ok(parse_details(response.text().unwrap_or_default()))
    }

    /// Extract design attributes from an uploaded image
    pub fn extract_details_from_image(&mut self, image_base64: &str) -> Result<DetailSuggestions> {
        let wire = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline_data("image/png", strip_data_uri_prefix(image_base64)),
                    Part::text(
                        "Analyze this image and extract its design attributes. Return valid JSON.",
                    ),
                ],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: Some("application/json".into()),
                response_schema: Some(detail_schema()),
                image_config: None,
            }),
        };

        let api_url = self.config.api_url.clone();
        let model = self.config.text_model.clone();
        let response = execute_with_failover(&mut self.pool, &self.classifier, |key| {
            GeminiClient::new(&api_url, key).generate(&model, &wire)
        })?;

        Ok(parse_details(response.text().unwrap_or_default()))
    }
}

/// Parts for the preview call. A reference image goes first and the
/// prompt is rewritten to point back at it.
fn preview_parts(prompt: &str, reference_image: Option<&str>) -> Vec<Part> {
    match reference_image {
        Some(image) => vec![
            Part::inline_data("image/png", strip_data_uri_prefix(image)),
            Part::text(format!("Based on this reference image: {}", prompt)),
        ],
        None => vec![Part::text(prompt)],
    }
}

/// Accept both bare base64 and full `data:...;base64,` URIs
fn strip_data_uri_prefix(s: &str) -> &str {
    s.split_once(',').map(|(_, data)| data).unwrap_or(s)
}
