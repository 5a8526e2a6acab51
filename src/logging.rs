//! Log setup. Everything goes to stderr so stdout only carries results.

use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "CELLFN_LOG";

/// Pick the filter directive: `CELLFN_LOG` wins, then `-v` count, then the
/// config file, then `warn`.
pub(crate) fn filter_directive(
    env: Option<String>,
    verbosity: u8,
    configured: Option<&str>,
) -> String {
    if let Some(env) = env.filter(|s| !s.trim().is_empty()) {
        return env;
    }
    match verbosity {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

pub(crate) fn init(verbosity: u8, configured: Option<&str>) {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbosity, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
