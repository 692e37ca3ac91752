use crate::params;
use crate::range::ParamRange;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Device-name substring matched against output ports by default.
pub const DEFAULT_DEVICE_NAME: &str = "Deepmind12D";

/// Hidden defaults file in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = ".deepmind_defaults";

/// Persisted user state: device name, per-parameter inclusion flags and
/// randomization ranges.
///
/// Every field tolerates absence in the blob (built-in defaults apply), and
/// parameter ids unknown to this build are ignored on load. Despite its
/// name, `skip_params` stores inclusion flags: `true` means the parameter
/// IS randomized (checkbox polarity of the panel this blob feeds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_device_name")]
    pub device_name: String,
    #[serde(default)]
    pub skip_params: HashMap<u16, bool>,
    #[serde(default)]
    pub param_ranges: HashMap<u16, ParamRange>,
}

fn default_device_name() -> String {
    DEFAULT_DEVICE_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        let mut skip_params = HashMap::new();
        let mut param_ranges = HashMap::new();
        for id in params::all_ids() {
            if let Some(info) = params::lookup(id) {
                skip_params.insert(id, !params::DEFAULT_EXCLUDED.contains(&id));
                param_ranges.insert(id, ParamRange::full(info.max_value));
            }
        }
        Self {
            device_name: default_device_name(),
            skip_params,
            param_ranges,
        }
    }
}
