//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init(log_file_path: &Path) -> Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("creating log file {}", log_file_path.display()))?;
    build_subscriber(log_file, default_filter()).try_init()?;
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `info`.
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn build_subscriber(
    log_file: File,
    env_filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_writes_to_file() {
        let log = tempfile::NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log.reopen().unwrap(), EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("power on");
        });
        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("power on"));
    }
}
