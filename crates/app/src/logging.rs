use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracker_core::config::LogConfig;

const LOG_FILE_PREFIX: &str = "tracker.log";

/// # Summary
/// Install the global subscriber writing to a daily-rolling file.
///
/// # Logic
/// 1. `RUST_LOG` wins; otherwise `log.level` is the filter.
/// 2. Events go through a non-blocking writer into `log.dir`, so the
///    terminal stays free for the command loop.
///
/// # Returns
/// * `WorkerGuard` - flushes buffered lines when dropped; keep it alive
///   until `main` returns.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let (writer, guard) = tracing_appender::non_blocking(file_appender(config)?);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()?;

    Ok(guard)
}

/// Daily-rolling appender in `log.dir`; an unusable directory is an error.
fn file_appender(config: &LogConfig) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(&config.dir)
}
