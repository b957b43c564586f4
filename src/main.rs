//! filingsview binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use filingsview::{app, args, theme};

/// Log timestamp in local time, `YYYY-MM-DD-T HH:MM:SS`.
struct FilingsviewTimer;

impl tracing_subscriber::fmt::time::FormatTime for FilingsviewTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Fallback filter used when `RUST_LOG` is unset or invalid.
///
/// Details:
/// - Writes to `~/.config/filingsview/logs/filingsview.log` through a non-blocking appender.
/// - Falls back to stderr if the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("filingsview.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FilingsviewTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FilingsviewTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = args.apply_to(theme::settings());
    tracing::info!(
        service_url = %settings.service_url,
        cik = %settings.default_cik,
        "filingsview starting"
    );
    if let Err(err) = app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("filingsview exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes the dashed timestamp without panicking.
    #[test]
    fn timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        super::FilingsviewTimer
            .format_time(&mut writer)
            .expect("format");
        assert!(buf.contains("-T "));
        assert_eq!(buf.len(), "2026-01-01-T 00:00:00".len());
    }
}
