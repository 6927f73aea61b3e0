//! This module provides the engine's logging hooks.
//!
//! Diagnostics go through the `log` facade. The `log_metric!` macro emits one
//! structured key-value line per codec call at `trace` level; the `format!` work
//! is skipped entirely unless that level is enabled. `enable_verbose_logging`
//! installs an `env_logger` backend for hosts that have none of their own.

use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Once;

use log::LevelFilter;

/// Logs a structured key-value metric line at trace level.
///
/// # Example
/// ```ignore
/// log_metric!("event"="compress", "original_size"=&1024, "compressed_size"=&38);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if log::log_enabled!(log::Level::Trace) {
            let parts: Vec<String> = vec![$(format!("\"{}\": \"{}\"", $key, $value)),+];
            log::trace!("ZSTD_ENGINE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at `info` level (or whatever `RUST_LOG` says).
///
/// Output goes to stderr, or is appended to `log_file` when given. Only the
/// first call has any effect; if the host already installed a logger, this is a
/// no-op. Fails only if `log_file` cannot be opened.
pub fn enable_verbose_logging(log_file: Option<&str>) -> io::Result<()> {
    let file: Option<File> = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);
        builder.parse_env("RUST_LOG");

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}
