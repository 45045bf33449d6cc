//! User brief inputs

use crate::category::NotebookFormat;
use crate::error::DeckError;
use serde::{Deserialize, Serialize};

/// Number of prompt variants to generate. Only 1, 3 or 5 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VariantCount {
    One,
    Three,
    Five,
}

impl VariantCount {
    pub fn as_u8(&self) -> u8 {
        match self {
            VariantCount::One => 1,
            VariantCount::Three => 3,
            VariantCount::Five => 5,
        }
    }
}

impl Default for VariantCount {
    fn default() -> Self {
        VariantCount::One
    }
}

impl TryFrom<u8> for VariantCount {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VariantCount::One),
            3 => Ok(VariantCount::Three),
            5 => Ok(VariantCount::Five),
            other => Err(DeckError::InvalidInput(format!(
                "prompt count must be 1, 3 or 5, got {}",
                other
            ))),
        }
    }
}

impl From<VariantCount> for u8 {
    fn from(value: VariantCount) -> Self {
        value.as_u8()
    }
}

/// The structured brief a user fills in before generation
///
/// Field names follow the legacy camelCase persisted-library format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptInputs {
    /// Main subject of the design. Must be non-empty to build a request.
    pub subject: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub colors: String,
    #[serde(default)]
    pub elements: String,
    /// Free-text notes, also used as raw analysis input for infographics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Base64-encoded reference image (logo / product shot)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
    /// Text content ingested from an uploaded document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file_content: Option<String>,
    #[serde(default)]
    pub prompt_count: VariantCount,
    /// Explicit aspect-ratio override, honored only for infographics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_format: Option<NotebookFormat>,
}

impl PromptInputs {
    /// Validate the brief before building a request
    pub fn validate(&self) -> crate::Result<()> {
        if self.subject.trim().is_empty() {
            return Err(DeckError::InvalidInput("subject must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial design attributes returned by the suggest / analyze operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailSuggestions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_count_bounds() {
        assert!(VariantCount::try_from(1).is_ok());
        assert!(VariantCount::try_from(3).is_ok());
        assert!(VariantCount::try_from(5).is_ok());
        assert!(VariantCount::try_from(0).is_err());
        assert!(VariantCount::try_from(2).is_err());
        assert!(VariantCount::try_from(4).is_err());
    }

    #[test]
    fn test_variant_count_serde() {
        let json = serde_json::to_string(&VariantCount::Three).unwrap();
        assert_eq!(json, "3");
        let parsed: VariantCount = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, VariantCount::Five);
        assert!(serde_json::from_str::<VariantCount>("2").is_err());
    }

    #[test]
    fn test_inputs_validate() {
        let mut inputs = PromptInputs {
            subject: "Summer sale".into(),
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
        inputs.subject = "   ".into();
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_inputs_camel_case_roundtrip() {
        let inputs = PromptInputs {
            subject: "Coffee shop opening".into(),
            prompt_count: VariantCount::Three,
            additional_info: Some("opens June 1st".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("\"promptCount\":3"));
        assert!(json.contains("\"additionalInfo\""));
        let parsed: PromptInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inputs);
    }
}
