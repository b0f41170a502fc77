/*!
 * # sheetlate
 *
 * A Rust tool for translating selected text columns of a spreadsheet with a
 * cached, retried, rate-limited wrapper around a remote translation service.
 *
 * ## Features
 *
 * - Read a named sheet of an Excel/ODS workbook
 * - Pick the sheet and columns interactively or from CLI flags
 * - Translate every text cell of the selected columns, best-effort: a text
 *   the service keeps failing on is kept unchanged instead of aborting the run
 * - In-memory cache so repeated cell values are translated once
 * - Fixed pre-request throttle and post-failure backoff pauses
 * - Write the translated table as CSV, same shape as the input
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `sheet`: In-memory table model and the column mapper
 * - `sheet_io`: Workbook reading and CSV output
 * - `translation`: Resilient translation:
 *   - `translation::cache`: Per-run source-to-translation cache
 *   - `translation::retry`: Throttled retry wrapper with fallback to the
 *     original text
 * - `providers`: Translation service clients:
 *   - `providers::libretranslate`: LibreTranslate-compatible HTTP client
 *   - `providers::mock`: Mock providers for tests
 * - `app_controller`: Main application controller
 * - `logging`: Colored stderr logger used by the binary
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod sheet;
pub mod sheet_io;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, SheetError, TranslationError};
pub use sheet::{CellValue, Column, ColumnKind, Sheet};
pub use translation::{RetryPolicy, TranslationCache, Translator};
