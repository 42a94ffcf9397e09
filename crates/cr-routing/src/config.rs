//! Router configuration.

use crate::InferenceMode;

/// Tunables for [`RouteFinder`](crate::RouteFinder).
///
/// Typically deserialized from the `router:` section of the CLI config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// How missing reverse connections are inferred.  Default: `Legacy`.
    pub inference: InferenceMode,
}

impl RouterConfig {
    pub fn with_inference(inference: InferenceMode) -> Self {
        Self { inference }
    }
}
