/*!
 * Resilient translation.
 *
 * This module contains the per-run translation cache and the retry wrapper
 * that turns a flaky provider call into a best-effort one:
 * - `translation::cache`: in-memory source text to translation map
 * - `translation::retry`: throttled, retried wrapper with fallback to the
 *   original text
 */

pub mod cache;
pub mod retry;

pub use cache::TranslationCache;
pub use retry::{RetryPolicy, Sleeper, TokioSleeper, Translator};
