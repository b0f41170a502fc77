/*!
 * Common test utilities for the sheetlate test suite
 */

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use sheetlate::providers::mock::MockProvider;
use sheetlate::sheet::{CellValue, Column, Sheet};
use sheetlate::translation::{RetryPolicy, Sleeper, Translator};

/// Install an env_logger for tests that exercise log output; repeat calls
/// are a no-op
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sleeper that records requested pauses instead of waiting on the wall clock
#[derive(Default)]
pub struct RecordingSleeper {
    recorded: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded pauses, usable after the sleeper has
    /// been moved into a translator
    pub fn log(&self) -> Arc<Mutex<Vec<Duration>>> {
        Arc::clone(&self.recorded)
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.recorded.lock().push(duration);
    }
}

/// Retry policy with distinctive, short durations for tests
pub fn test_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        timeout: Duration::from_secs(5),
        throttle: Duration::from_millis(300),
        backoff: Duration::from_millis(1000),
    }
}

/// Translator wired to a mock provider and a recording sleeper
pub fn test_translator(provider: MockProvider, policy: RetryPolicy) -> (Translator, Arc<Mutex<Vec<Duration>>>) {
    let sleeper = RecordingSleeper::new();
    let log = sleeper.log();
    let translator = Translator::new(Box::new(provider), policy, "zh-CN", "en")
        .with_sleeper(Box::new(sleeper));
    (translator, log)
}

/// A small two-column sheet with mixed cell types
pub fn sample_sheet() -> Sheet {
    Sheet::new("Sheet1", vec![
        Column::new("Name", vec![
            CellValue::Text("a".to_string()),
            CellValue::Number(3.0),
            CellValue::Empty,
            CellValue::Text("b".to_string()),
        ]),
        Column::new("Amount", vec![
            CellValue::Number(1.0),
            CellValue::Number(2.0),
            CellValue::Empty,
            CellValue::Number(4.0),
        ]),
    ])
}
