//! Ordered pool of interchangeable API keys with a rotation cursor
//!
//! The pool is process-wide state shared by every operation. When two
//! operations are in flight and one rotates the cursor on quota
//! exhaustion, the other will read the rotated cursor rather than the
//! value it captured at start. This race is accepted: advancing to a key
//! that may still be valid is harmless, and each call detects and reacts
//! to its own failures independently.

use crate::config::{DeckConfig, ENV_API_KEY};
use promptdeck_core::{DeckError, Result};

/// Ordered API keys plus the rotation cursor over them
#[derive(Debug, Default)]
pub struct CredentialPool {
    credentials: Vec<String>,
    cursor: usize,
}

impl CredentialPool {
    /// Build a pool from the persisted key list, falling back to the
    /// `PROMPTDECK_API_KEY` environment variable when the list is empty.
    /// An empty pool is not an error here; it surfaces on first use.
    pub fn load(config: &DeckConfig) -> Self {
        let mut credentials = config.api_keys.clone();
        if credentials.is_empty() {
            if let Ok(key) = std::env::var(ENV_API_KEY) {
                let key = key.trim().to_string();
                if !key.is_empty() {
                    credentials.push(key);
                }
            }
        }
        Self {
            credentials,
            cursor: 0,
        }
    }

    /// Build a pool from an explicit key list (cursor at 0)
    pub fn from_keys(credentials: Vec<String>) -> Self {
        Self {
            credentials,
            cursor: 0,
        }
    }

    /// Swap the key list wholesale and reset the cursor
    pub fn replace(&mut self, credentials: Vec<String>) {
        self.credentials = credentials;
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The key at the cursor. Wraps a drifted cursor back into bounds
    /// before reading; errors only when the pool is empty.
    pub fn current(&mut self) -> Result<&str> {
        if self.credentials.is_empty() {
            return Err(DeckError::NotConfigured);
        }
        if self.cursor >= self.credentials.len() {
            self.cursor = 0;
        }
        Ok(&self.credentials[self.cursor])
    }

    /// Move the cursor to the next key, wrapping at the end. Callers must
    /// check emptiness first.
    pub fn advance(&mut self) {
        if !self.credentials.is_empty() {
            self.cursor = (self.cursor + 1) % self.credentials.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_fails_fast() {
        let mut pool = CredentialPool::from_keys(vec![]);
        assert!(pool.is_empty());
        assert!(matches!(pool.current(), Err(DeckError::NotConfigured)));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut pool = CredentialPool::from_keys(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(pool.current().unwrap(), "a");
        pool.advance();
        assert_eq!(pool.current().unwrap(), "b");
        pool.advance();
        pool.advance();
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.current().unwrap(), "a");
    }

    #[test]
    fn test_replace_resets_cursor() {
        let mut pool = CredentialPool::from_keys(vec!["a".into(), "b".into()]);
        pool.advance();
        assert_eq!(pool.cursor(), 1);
        pool.replace(vec!["x".into()]);
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.current().unwrap(), "x");
    }

    #[test]
    fn test_drifted_cursor_wraps_on_read() {
        // A replace with a shorter list can leave a stale cursor in a
        // caller that captured it; current() must still read safely.
        let mut pool = CredentialPool::from_keys(vec!["a".into(), "b".into(), "c".into()]);
        pool.advance();
        pool.advance();
        pool.replace(vec!["only".into()]);
        pool.cursor = 2; // simulate drift
        assert_eq!(pool.current().unwrap(), "only");
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn test_load_env_fallback() {
        let var = "PROMPTDECK_API_KEY";
        std::env::set_var(var, "env-key");
        let pool = CredentialPool::load(&DeckConfig::default());
        std::env::remove_var(var);
        assert_eq!(pool.len(), 1);

        let mut config = DeckConfig::default();
        config.api_keys = vec!["persisted".into()];
        std::env::set_var(var, "env-key");
        let mut pool = CredentialPool::load(&config);
        std::env::remove_var(var);
        // Persisted keys win over the env fallback
        assert_eq!(pool.current().unwrap(), "persisted");
    }
}
