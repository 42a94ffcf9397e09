use std::io;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

use cr_core::{CrError, CrResult};

/// Filter directive from `-v` count, then the config file, then `info`.
pub fn resolve_level(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured.unwrap_or("info").to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install a stderr fmt subscriber.  `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) -> CrResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| CrError::Config(format!("invalid log level {level:?}: {e}")))?,
    };

    let collector = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(io::stderr)
            .with_target(false)
            .with_filter(filter),
    );
    tracing::subscriber::set_global_default(collector)
        .map_err(|e| CrError::Config(format!("unable to set global subscriber: {e}")))
}
