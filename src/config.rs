// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Persisted application preferences.
///
/// Scan results and captured frames are intentionally not stored; the config
/// only carries UI preferences that survive between runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Last used camera device path (e.g., /dev/video0)
    pub last_camera_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_camera_path: None,
        }
    }
}
