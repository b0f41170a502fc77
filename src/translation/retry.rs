/*!
 * Cached, retried, rate-limited wrapper around a translation provider.
 *
 * The wrapper is deliberately best-effort: no failure path ever reaches the
 * caller. When every attempt for a text fails, the original text is cached
 * and returned so future lookups short-circuit without retrying.
 */

use async_trait::async_trait;
use log::{debug, warn};
use std::time::{Duration, Instant};

use crate::app_config::TranslationConfig;
use crate::errors::TranslationError;
use crate::providers::Provider;
use super::cache::{truncate_text, TranslationCache};

/// Timing parameters for the retry loop
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts per text
    pub max_retries: u32,

    /// A successful call slower than this is classified as a failure.
    /// The check runs after the call returns; it does not abort the call.
    pub timeout: Duration,

    /// Pause before every attempt, throttling the request rate
    pub throttle: Duration,

    /// Pause after a failed attempt when attempts remain
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Build a policy from the translation configuration
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            timeout: Duration::from_secs(config.timeout_secs),
            throttle: Duration::from_millis(config.throttle_ms),
            backoff: Duration::from_millis(config.backoff_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&TranslationConfig::default())
    }
}

/// Injectable sleep, so tests can observe the throttle and backoff pauses
/// without real wall-clock waits
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Pause for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Default sleeper backed by the tokio timer
#[derive(Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Cached translation wrapper over a provider
pub struct Translator {
    /// Provider used for the actual network calls
    provider: Box<dyn Provider>,

    /// Per-run cache of source text to translated text
    cache: TranslationCache,

    /// Retry loop timing
    policy: RetryPolicy,

    /// Source language code, fixed for the run
    source_language: String,

    /// Target language code, fixed for the run
    target_language: String,

    /// Sleep implementation for throttle and backoff pauses
    sleeper: Box<dyn Sleeper>,
}

impl Translator {
    /// Create a new translator with a fresh cache and the default sleeper
    pub fn new(
        provider: Box<dyn Provider>,
        policy: RetryPolicy,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            cache: TranslationCache::new(),
            policy,
            source_language: source_language.into(),
            target_language: target_language.into(),
            sleeper: Box::new(TokioSleeper),
        }
    }

    /// Replace the sleeper, for tests that must not wait on the wall clock
    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Access the cache, for statistics reporting
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Translate one text, consulting the cache first and degrading to the
    /// original text when every attempt fails
    ///
    /// Cached texts return immediately with no pause and no network call.
    /// Otherwise up to `max_retries` attempts are made, each preceded by the
    /// throttle pause and followed, on failure, by the backoff pause when
    /// attempts remain.
    pub async fn translate_with_retry(&self, text: &str) -> String {
        if let Some(cached) = self.cache.get(text) {
            return cached;
        }

        for attempt in 1..=self.policy.max_retries {
            self.sleeper.sleep(self.policy.throttle).await;

            match self.attempt(text).await {
                Ok(translated) => {
                    debug!("Translated '{}' on attempt {}", truncate_text(text, 30), attempt);
                    self.cache.store(text, &translated);
                    return translated;
                },
                Err(e) => {
                    warn!("Attempt {}/{} failed for '{}': {}",
                          attempt, self.policy.max_retries, truncate_text(text, 30), e);

                    if attempt < self.policy.max_retries {
                        self.sleeper.sleep(self.policy.backoff).await;
                    }
                }
            }
        }

        let exhausted = TranslationError::RetriesExhausted { attempts: self.policy.max_retries };
        warn!("{}; keeping original text '{}'", exhausted, truncate_text(text, 30));

        // Caching the identity mapping stops future lookups from retrying
        // a text the service already refused repeatedly.
        self.cache.store(text, text);
        text.to_string()
    }

    /// Run a single attempt, classifying a slow success as a failure
    async fn attempt(&self, text: &str) -> Result<String, TranslationError> {
        let started = Instant::now();
        let translated = self.provider
            .translate(text, &self.source_language, &self.target_language)
            .await?;
        let elapsed = started.elapsed();

        if elapsed > self.policy.timeout {
            return Err(TranslationError::SlowResponse {
                elapsed_ms: elapsed.as_millis() as u64,
                limit_ms: self.policy.timeout.as_millis() as u64,
            });
        }

        Ok(translated)
    }
}
