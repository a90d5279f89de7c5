//! Logging setup.
//!
//! Records go through the `log` facade into `tui-logger`, which buffers them
//! for the log pane.

use crate::error::AppError;
use log::LevelFilter;

/// Timestamp format of log pane lines.
///
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Install the logger. Records at `level` and above are kept for display.
///
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    tui_logger::init_logger(LevelFilter::Trace).map_err(|e| AppError::Logger(e.to_string()))?;
    tui_logger::set_default_level(level);
    Ok(())
}

/// Parse a level name given on the command line.
///
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_any_case() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn timestamp_format_is_valid() {
        let formatted = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(formatted.len(), "12:34:56.789".len());
    }
}
