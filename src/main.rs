//! dashview binary entrypoint kept minimal. The full runtime lives in `dashview::app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dashview::args::{Args, apply_overrides, determine_log_level, render_print};
use dashview::sources::resolve_dataset;
use dashview::theme::{logs_dir, settings};

struct DashviewTimer;

impl tracing_subscriber::fmt::time::FormatTime for DashviewTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the filter: `RUST_LOG` wins, otherwise the level from the flags.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// Initialize tracing to `~/.config/dashview/logs/dashview.log`, or stderr on failure.
fn init_logging(level: &str) {
    let log_path = logs_dir().join("dashview.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DashviewTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(DashviewTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let mut prefs = settings();
    apply_overrides(&args, &mut prefs);
    tracing::info!(
        start = prefs.start_page.as_config_key(),
        per_page = prefs.items_per_page,
        "dashview starting"
    );

    let data = match resolve_dataset(prefs.data_file.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "failed to load dataset");
            eprintln!("dashview: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.print.is_some() {
        return match render_print(&args, &prefs, data) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "print failed");
                eprintln!("dashview: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let code = match dashview::app::run(&prefs, data) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Application error");
            eprintln!("dashview: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("dashview exited");
    code
}
