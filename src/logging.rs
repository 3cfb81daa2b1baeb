//! Logging bootstrap.
//!
//! Everything in the crate logs through the `log` facade; this module wires
//! the facade to `flexi_logger` writing to stderr. actix-web's request logger
//! goes through the same facade.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

pub const DEFAULT_LOG_SPEC: &str = "info";

/// Starts stderr logging with a spec such as `info` or `employee_pairs=debug,actix_web=warn`.
///
/// The returned handle must stay alive for as long as logs should be written.
pub fn init_logging(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let spec = if spec.trim().is_empty() { DEFAULT_LOG_SPEC } else { spec };
    Logger::try_with_str(spec)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
}
