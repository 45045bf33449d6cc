//! Failover execution over the credential pool
//!
//! One generic loop serves every operation type (prompt generation,
//! preview images, suggestion, image analysis). Attempts are strictly
//! sequential, one key at a time, and bounded by the pool size.

use crate::pool::CredentialPool;
use crate::quota::QuotaClassifier;
use promptdeck_core::{DeckError, Result};

/// Execute `op` with the current key, rotating to the next key whenever
/// the classifier reports quota exhaustion.
///
/// - Empty pool fails fast with `NotConfigured`, no attempt made.
/// - A non-quota error propagates unchanged and is never retried.
/// - A full rotation cycle without success fails with `PoolExhausted`;
///   at most `pool.len()` attempts are made per invocation.
/// - On success the cursor is left at the key that succeeded, so
///   subsequent calls start from a known-good key.
pub fn execute_with_failover<T, F>(
    pool: &mut CredentialPool,
    classifier: &QuotaClassifier,
    mut op: F,
) -> Result<T>
where
    F: FnMut(&str) -> Result<T>,
{
    if pool.is_empty() {
        return Err(DeckError::NotConfigured);
    }
    let start_index = pool.cursor();
    loop {
        let key = pool.current()?.to_string();
        match op(&key) {
            Ok(value) => return Ok(value),
            Err(e) if classifier.is_quota_exhausted(&e) => {
                pool.advance();
                if pool.cursor() == start_index {
                    return Err(DeckError::PoolExhausted);
                }
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota_error() -> DeckError {
        DeckError::Api {
            status: Some(429),
            message: "RESOURCE_EXHAUSTED".to_string(),
        }
    }

    fn pool_of(keys: &[&str]) -> CredentialPool {
        CredentialPool::from_keys(keys.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn test_empty_pool_no_attempts() {
        let mut pool = pool_of(&[]);
        let classifier = QuotaClassifier::default();
        let mut attempts = 0;
        let result: Result<()> = execute_with_failover(&mut pool, &classifier, |_| {
            attempts += 1;
            Ok(())
        });
        assert!(matches!(result, Err(DeckError::NotConfigured)));
        assert_eq!(attempts, 0);
    }

    #[test]
    fn test_first_key_success() {
        let mut pool = pool_of(&["a", "b"]);
        let classifier = QuotaClassifier::default();
        let result =
            execute_with_failover(&mut pool, &classifier, |key| Ok(key.to_string())).unwrap();
        assert_eq!(result, "a");
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn test_rotates_past_exhausted_keys() {
        // Pool [A, B, C]: A and B report quota errors, C succeeds.
        let mut pool = pool_of(&["A", "B", "C"]);
        let classifier = QuotaClassifier::default();
        let result = execute_with_failover(&mut pool, &classifier, |key| {
            if key == "C" {
                Ok(key.to_string())
            } else {
                Err(quota_error())
            }
        })
        .unwrap();
        assert_eq!(result, "C");
        // Cursor stays on the key that worked for subsequent calls
        assert_eq!(pool.cursor(), 2);
    }

    #[test]
    fn test_full_cycle_exhausts_pool() {
        let mut pool = pool_of(&["a", "b", "c"]);
        let classifier = QuotaClassifier::default();
        let mut attempts = 0;
        let result: Result<()> = execute_with_failover(&mut pool, &classifier, |_| {
            attempts += 1;
            Err(quota_error())
        });
        assert!(matches!(result, Err(DeckError::PoolExhausted)));
        // Exactly one attempt per key, no unbounded retry
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_exhaustion_from_nonzero_cursor() {
        // A previous call left the cursor mid-pool; a full cycle from
        // there must still try every key exactly once.
        let mut pool = pool_of(&["a", "b", "c"]);
        pool.advance();
        let classifier = QuotaClassifier::default();
        let mut tried = Vec::new();
        let result: Result<()> = execute_with_failover(&mut pool, &classifier, |key| {
            tried.push(key.to_string());
            Err(quota_error())
        });
        assert!(matches!(result, Err(DeckError::PoolExhausted)));
        assert_eq!(tried, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_non_quota_error_propagates_immediately() {
        // Pool [A]: a non-quota error fails without rotation.
        let mut pool = pool_of(&["A"]);
        let classifier = QuotaClassifier::default();
        let mut attempts = 0;
        let result: Result<()> = execute_with_failover(&mut pool, &classifier, |_| {
            attempts += 1;
            Err(DeckError::Api {
                status: Some(400),
                message: "invalid argument".to_string(),
            })
        });
        assert_eq!(attempts, 1);
        assert_eq!(pool.cursor(), 0);
        match result {
            Err(DeckError::Api { status, message }) => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "invalid argument");
            }
            other => panic!("expected the original error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_k_failures_then_success_uses_next_key() {
        // k quota failures followed by success lands on key k+1.
        for k in 0..4 {
            let mut pool = pool_of(&["k0", "k1", "k2", "k3", "k4"]);
            let classifier = QuotaClassifier::default();
            let mut failures_left = k;
            let result = execute_with_failover(&mut pool, &classifier, |key| {
                if failures_left > 0 {
                    failures_left -= 1;
                    Err(quota_error())
                } else {
                    Ok(key.to_string())
                }
            })
            .unwrap();
            assert_eq!(result, format!("k{}", k));
            assert_eq!(pool.cursor(), k);
        }
    }
}
