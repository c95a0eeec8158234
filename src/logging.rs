// src/logging.rs

use crate::errors::{MostradorError, MostradorResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Starts the file logger. The terminal owns the screen, so nothing may log
/// to stdout; everything goes to `logs/mostrador.log`.
///
/// The returned handle must stay alive for the process lifetime, or buffered
/// records are lost.
pub fn init(level: &str) -> MostradorResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| MostradorError::logger_error(format!("invalid log level spec: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("mostrador"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .map_err(|e| MostradorError::logger_error(format!("failed to start logger: {}", e)))
}
