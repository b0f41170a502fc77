/*!
 * Error types for the sheetlate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the translation service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur during a single translation attempt
///
/// These never escape the retry wrapper: every failure path degrades to
/// returning the original text.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The call completed, but too slowly to be counted as a success.
    /// Classified after the fact from the measured duration, so it does not
    /// bound the latency of an in-flight call.
    #[error("Response too slow: took {elapsed_ms}ms, limit is {limit_ms}ms")]
    SlowResponse {
        /// Measured wall-clock duration of the call in milliseconds
        elapsed_ms: u64,
        /// Configured limit in milliseconds
        limit_ms: u64
    },

    /// All retry attempts were consumed without a usable result
    #[error("Translation failed after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts that were made
        attempts: u32
    },
}

/// Errors that can occur while reading, mapping, or writing sheets
#[derive(Error, Debug)]
pub enum SheetError {
    /// The workbook could not be opened or read
    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    /// The requested sheet does not exist in the workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// A selected column does not exist in the sheet
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// The output file could not be written
    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid sheet or column selection from the operator
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Error from the translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from sheet processing
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
