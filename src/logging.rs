use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Console filter: our crate at the requested level, HTTP internals held at info.
pub fn console_filter(debug: bool, verbose: bool) -> EnvFilter {
    if let Ok(f) = EnvFilter::try_from_default_env() {
        return f;
    }
    let crate_level = if debug { "debug" } else if verbose { "info" } else { "warn" };
    let filter_str = format!(
        "ct_harvest={crate},reqwest=info,hyper=info,h2=info,warn",
        crate = crate_level
    );
    EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level))
}

/// Audit layer: ERROR records only, one line each with timestamp and level, no ANSI.
pub fn audit_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::ERROR)
}

/// Install the process-wide subscriber: stderr for the operator, plus an
/// append-only audit file that records errors only.
///
/// If the log file cannot be opened the console layer is still installed and
/// the error is returned so the caller can report it.
pub fn init(log_file: &Path, debug: bool, verbose: bool) -> std::io::Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter(debug, verbose));

    let file = log_file
        .parent()
        .map_or(Ok(()), crate::utils::ensure_dir)
        .and_then(|_| fs::OpenOptions::new().create(true).append(true).open(log_file));

    match file {
        Ok(f) => {
            tracing_subscriber::registry()
                .with(console)
                .with(audit_layer(Mutex::new(f)))
                .init();
            Ok(())
        }
        Err(e) => {
            tracing_subscriber::registry().with(console).init();
            Err(e)
        }
    }
}
