/// Logging bootstrap
///
/// Logs go to stderr with timestamps and source locations. The renderer
/// stack is noisy at `info`, so its crates are capped at `warn`.
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;

use crate::config::LogLevel;

/// Crates whose chatter is capped regardless of the chosen level
const QUIET_CRATES: [&str; 5] = ["wgpu_core", "wgpu_hal", "naga", "cosmic_text", "iced_wgpu"];

/// Start the logger. Keep the returned handle alive for the whole run.
pub fn init(level: LogLevel) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(log_spec(level))?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start module=app status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(handle)
}

/// Build a flexi_logger spec such as `info, naga=warn`
fn log_spec(level: LogLevel) -> String {
    let mut spec = level.as_str().to_string();
    // Only cap crates when the global level is more verbose than warn
    if matches!(level, LogLevel::Info | LogLevel::Debug | LogLevel::Trace) {
        for name in QUIET_CRATES {
            spec.push_str(&format!(", {name}=warn"));
        }
    }
    spec
}
