/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::uppercase()` - Always succeeds, returning the input uppercased
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::fail_first(n)` - Fails the first n requests, then succeeds
 * - `MockProvider::slow_first(ms)` - First request succeeds slowly, later ones fast
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, returning the uppercased input
    Uppercase,
    /// Always fails with an error
    Failing,
    /// Fails the first `failures` requests, then succeeds
    FailFirst {
        /// Number of leading requests that fail
        failures: usize
    },
    /// First request sleeps for `delay_ms` before succeeding, later requests
    /// return immediately (for post-hoc slow-response classification tests)
    SlowFirst {
        /// Artificial delay of the first request in milliseconds
        delay_ms: u64
    },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that uppercases its input
    pub fn uppercase() -> Self {
        Self::new(MockBehavior::Uppercase)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that fails the first `failures` requests
    pub fn fail_first(failures: usize) -> Self {
        Self::new(MockBehavior::FailFirst { failures })
    }

    /// Create a mock provider whose first request is slow
    pub fn slow_first(delay_ms: u64) -> Self {
        Self::new(MockBehavior::SlowFirst { delay_ms })
    }

    /// Number of translate requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the request counter, for asserting call counts after
    /// the provider has been moved into a translator
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.request_count)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate(&self, text: &str, _source_language: &str, _target_language: &str) -> Result<String, ProviderError> {
        let request_number = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Uppercase => Ok(text.to_uppercase()),
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("mock provider is configured to fail".to_string()))
            },
            MockBehavior::FailFirst { failures } => {
                if request_number <= failures {
                    Err(ProviderError::ConnectionError(format!(
                        "mock failure {} of {}", request_number, failures
                    )))
                } else {
                    Ok(text.to_uppercase())
                }
            },
            MockBehavior::SlowFirst { delay_ms } => {
                if request_number == 1 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                Ok(text.to_uppercase())
            },
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => {
                Err(ProviderError::ConnectionError("mock provider is configured to fail".to_string()))
            },
            _ => Ok(()),
        }
    }
}
