/*!
 * Provider implementations for translation services.
 *
 * This module contains the client used to reach the remote translation
 * service, plus mock implementations for testing. The language pair is
 * fixed at configuration time and passed through unchanged on every call.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the retry wrapper.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate a single text from the source language to the target language
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_language` - Source language code (e.g. "zh-CN")
    /// * `target_language` - Target language code (e.g. "en")
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod libretranslate;
pub mod mock;
