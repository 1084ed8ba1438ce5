//! Logging setup.
//!
//! Records go through the `log` facade; `console_log` forwards them to the
//! browser console.

use std::sync::Once;

use log::{Level, LevelFilter};

use crate::error::{Result, TreeError};

static INIT: Once = Once::new();

/// Install the console logger once; later calls only change the level
pub fn init_logging(level: LevelFilter) -> Result<()> {
    let mut installed = Ok(());
    INIT.call_once(|| {
        installed = console_log::init_with_level(Level::Trace)
            .map_err(|e| TreeError::Logging(e.to_string()));
    });
    log::set_max_level(level);
    log::debug!("logging at {}", level);
    installed
}
