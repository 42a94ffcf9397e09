//! YAML configuration.
//!
//! ```yaml
//! router:
//!   inference: legacy   # legacy | symmetric | declared
//! log_level: info
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;

use cr_core::{CrError, CrResult};
use cr_routing::RouterConfig;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub router: RouterConfig,
    pub log_level: Option<String>,
}

/// Read `path`, or fall back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> CrResult<AppConfig> {
    match path {
        None => Ok(AppConfig::default()),
        Some(p) => parse_config(&std::fs::read_to_string(p)?),
    }
}

pub fn parse_config(yaml: &str) -> CrResult<AppConfig> {
    if yaml.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| CrError::Parse(format!("config: {e}")))
}
