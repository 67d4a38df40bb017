use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (derived from
/// `--verbose`) is used. Output carries no timestamps and only uses ANSI
/// colors when stderr is a terminal.
pub fn init_logging(default_filter: &str, with_target: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(with_target)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!("logging initialized with filter '{}'", default_filter);

    Ok(())
}
