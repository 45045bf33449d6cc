//! Quota-exhaustion classification
//!
//! Deciding whether an API failure means "this key's quota is spent" is
//! heuristic: some services answer HTTP 429, others bury a status string
//! in the error body. The signal set is held as data so it can be
//! extended without touching the failover loop.

use promptdeck_core::DeckError;

/// Classifies errors as quota exhaustion (rotate key) or not (propagate)
#[derive(Debug, Clone)]
pub struct QuotaClassifier {
    /// HTTP status codes that indicate rate/quota limiting
    pub status_codes: Vec<u16>,
    /// Case-insensitive substrings hunted in the error message
    pub message_markers: Vec<String>,
}

impl Default for QuotaClassifier {
    fn default() -> Self {
        Self {
            status_codes: vec![429],
            message_markers: vec![
                "resource_exhausted".to_string(),
                "quota".to_string(),
                "rate limit".to_string(),
            ],
        }
    }
}

impl QuotaClassifier {
    /// True when the error should trigger key rotation
    pub fn is_quota_exhausted(&self, error: &DeckError) -> bool {
        let DeckError::Api { status, message } = error else {
            return false;
        };
        if let Some(code) = status {
            if self.status_codes.contains(code) {
                return true;
            }
        }
        let lowered = message.to_lowercase();
        self.message_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: Option<u16>, message: &str) -> DeckError {
        DeckError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_classifies_http_429() {
        let classifier = QuotaClassifier::default();
        assert!(classifier.is_quota_exhausted(&api_error(Some(429), "Too Many Requests")));
        assert!(!classifier.is_quota_exhausted(&api_error(Some(500), "Internal Server Error")));
    }

    #[test]
    fn test_classifies_resource_exhausted_body() {
        // Gemini's quota rejection shape
        let classifier = QuotaClassifier::default();
        let body = r#"{"error": {"code": 429, "status": "RESOURCE_EXHAUSTED", "message": "Quota exceeded for quota metric"}}"#;
        assert!(classifier.is_quota_exhausted(&api_error(None, body)));
    }

    #[test]
    fn test_classifies_rate_limit_message() {
        let classifier = QuotaClassifier::default();
        assert!(classifier.is_quota_exhausted(&api_error(None, "Rate limit reached for key")));
        assert!(!classifier.is_quota_exhausted(&api_error(None, "connection reset by peer")));
    }

    #[test]
    fn test_non_api_errors_never_match() {
        let classifier = QuotaClassifier::default();
        assert!(!classifier.is_quota_exhausted(&DeckError::NotConfigured));
        assert!(!classifier.is_quota_exhausted(&DeckError::NoImageData));
    }

    #[test]
    fn test_extended_signal_set() {
        let classifier = QuotaClassifier {
            status_codes: vec![429, 503],
            message_markers: vec!["overloaded".into()],
        };
        assert!(classifier.is_quota_exhausted(&api_error(Some(503), "busy")));
        assert!(classifier.is_quota_exhausted(&api_error(None, "model is OVERLOADED")));
        assert!(!classifier.is_quota_exhausted(&api_error(None, "quota exceeded")));
    }
}
