//! Structured logging with dual output.
//!
//! - JSONL to a file under the user folder (`logs/cliptools.jsonl`), machine
//!   readable for later digging
//! - pretty output to stderr for the developer running in a terminal
//!
//! Initialize once from `main` and keep the returned guard alive for the
//! duration of the program; dropping it flushes the file writer.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init(user_folder: &Path) -> LoggingGuard {
    let log_dir = user_folder.join("logs");
    if let Err(err) = fs::create_dir_all(&log_dir) {
        eprintln!("[cliptools] cannot create log directory: {err}");
    }

    let appender = tracing_appender::rolling::never(&log_dir, "cliptools.jsonl");
    let (file_writer, file_guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer().json().with_writer(file_writer);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    LoggingGuard {
        _file_guard: file_guard,
    }
}
