//! Logging bootstrap for the binary. The library only emits through the
//! `log` facade; embedders bring their own backend.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start stderr logging at `level`, overridable via `RUST_LOG`. The
/// returned handle must be held for the lifetime of the process.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?.log_to_stderr().start()
}

pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_a_known_level() {
        assert!(matches!(default_level(), "debug" | "info"));
    }
}
