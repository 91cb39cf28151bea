use tracing_subscriber::EnvFilter;

/// Env var holding a full `EnvFilter` directive; it wins over the verbosity flag.
pub const LOG_ENV: &str = "SPENDWISE_LOG";

pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("warn,spendwise_chat={level}")
}

pub fn init_tracing(verbose: bool) {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)));

    // stdout carries command output, so logs go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
