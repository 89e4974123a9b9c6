//! The admission boundary: raw requested names become [`Admission`]s here.

use lupus_game::{Admission, MASTER_NAME};
use serde::{Deserialize, Serialize};

/// Lobby settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// The requested name that claims the master seat, compared
    /// case-insensitively. Default: `"master"`.
    ///
    /// Whatever this is set to, the game itself still refuses `"master"`
    /// as a player name.
    pub master_name: String,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            master_name: MASTER_NAME.to_string(),
        }
    }
}

impl LobbyConfig {
    /// Decides what a requested display name asks for.
    ///
    /// Returns `None` for a missing or empty name: there is nothing to
    /// admit.
    pub fn admission_for(&self, requested: Option<&str>) -> Option<Admission> {
        let name = requested.filter(|n| !n.is_empty())?;
        if name.to_lowercase() == self.master_name.to_lowercase() {
            Some(Admission::AsMaster)
        } else {
            Some(Admission::player(name))
        }
    }
}
