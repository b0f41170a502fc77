/*!
 * Tests for the stderr logger's level filtering
 */

use log::{Level, LevelFilter, Log, MetadataBuilder};

use sheetlate::logging::CustomLogger;

use crate::common::init_test_logging;

#[test]
fn test_customLogger_maxLevelChangedAfterInstall_shouldFollowNewLevel() {
    init_test_logging();

    let logger = CustomLogger;
    let debug_metadata = MetadataBuilder::new()
        .level(Level::Debug)
        .target("sheetlate")
        .build();
    let info_metadata = MetadataBuilder::new()
        .level(Level::Info)
        .target("sheetlate")
        .build();

    log::set_max_level(LevelFilter::Info);
    assert!(logger.enabled(&info_metadata));
    assert!(!logger.enabled(&debug_metadata));

    // The binary raises the level like this once the config file and CLI
    // flags are known, after the logger is already installed
    log::set_max_level(LevelFilter::Debug);
    assert!(logger.enabled(&debug_metadata));
    assert!(logger.enabled(&info_metadata));
}
