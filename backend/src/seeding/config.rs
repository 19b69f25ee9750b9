//! Ladder seeding configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling ladder seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LADDER_SEED")]
pub struct LadderSeedSettings {
    /// Seed the default ladders when the server starts.
    #[ortho_config(default = false)]
    pub enabled: bool,
}

impl LadderSeedSettings {
    /// Whether startup seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
