//! `Lobby` and its builder: the caller-facing entry point.
//!
//! A transport layer maps each connection to an identity string and hands
//! over whatever name the user typed. The lobby turns that into an
//! [`Admission`](lupus_game::Admission) and runs it against the shared game.

use std::path::PathBuf;

use lupus_catalog::{MemoryCatalog, RoleCatalog, RoleId};
use lupus_game::{Identity, SharedGame};
use serde::Serialize;

use crate::{LobbyConfig, LupusError};

/// Everything a player needs to read about their own role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCard {
    pub role: RoleId,
    pub name: String,
    pub descriptions: Vec<String>,
    pub player_description: String,
    pub team: String,
    pub race: String,
    pub image: String,
    /// Display names of the other players holding the same role, when the
    /// role lets them see each other.
    pub companions: Vec<String>,
}

/// A lobby for one game.
///
/// Cheap to clone; clones share the game.
pub struct Lobby<C: RoleCatalog> {
    game: SharedGame<C>,
    config: LobbyConfig,
}

impl<C: RoleCatalog> Clone for Lobby<C> {
    fn clone(&self) -> Self {
        Self {
            game: self.game.clone(),
            config: self.config.clone(),
        }
    }
}

impl Lobby<MemoryCatalog> {
    /// Creates a builder that loads a JSON role file.
    pub fn builder() -> LobbyBuilder {
        LobbyBuilder::new()
    }
}

impl<C: RoleCatalog> Lobby<C> {
    /// Opens a lobby over any catalog.
    pub fn new(catalog: C, config: LobbyConfig) -> Self {
        Self {
            game: SharedGame::new(catalog),
            config,
        }
    }

    /// Admits `identity` under the name it asked for.
    ///
    /// The configured master name claims the master seat; any other
    /// non-empty name asks for a player seat. Returns `true` if the
    /// identity is now registered.
    pub async fn join(
        &self,
        identity: impl Into<Identity>,
        requested_name: Option<&str>,
    ) -> bool {
        let identity = identity.into();
        let Some(admission) = self.config.admission_for(requested_name) else {
            tracing::debug!(%identity, "admission rejected: no name given");
            return false;
        };
        self.game.admit(identity, admission).await
    }

    /// Builds the role card of a seated player.
    ///
    /// # Errors
    /// [`LupusError::Game`] if `identity` is not a player (the master
    /// included).
    pub async fn role_card(&self, identity: &Identity) -> Result<RoleCard, LupusError> {
        let game = self.game.read().await;

        let role = game.role_of(identity).inspect_err(|e| {
            tracing::warn!(%identity, error = %e, "role card requested for non-player");
        })?;
        let companions = game
            .players_similar_to(identity)?
            .iter()
            .map(|id| game.name_of(id).to_string())
            .collect();

        Ok(RoleCard {
            role: role.clone(),
            name: game.role_name_of(role).unwrap_or_default().to_string(),
            descriptions: game
                .descriptions_of(role)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            player_description: game
                .player_description_of(role)
                .unwrap_or_default()
                .to_string(),
            team: game.team_of(role).unwrap_or_default().to_string(),
            race: game.race_of(role).unwrap_or_default().to_string(),
            image: game.image_path_of(role).unwrap_or_default().to_string(),
            companions,
        })
    }

    /// The underlying shared game, for every other query.
    pub fn game(&self) -> &SharedGame<C> {
        &self.game
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }
}

/// Builder for a [`Lobby`] backed by a JSON role file.
///
/// # Example
///
/// ```rust,no_run
/// use lupus::prelude::*;
///
/// let lobby = Lobby::builder()
///     .roles_file("roles.json")
///     .config(LobbyConfig { master_name: "narrator".into() })
///     .build()?;
/// # Ok::<(), LupusError>(())
/// ```
pub struct LobbyBuilder {
    source: RoleSource,
    config: LobbyConfig,
}

enum RoleSource {
    Empty,
    File(PathBuf),
    Json(String),
}

impl LobbyBuilder {
    /// A builder with no roles and the default config.
    pub fn new() -> Self {
        Self {
            source: RoleSource::Empty,
            config: LobbyConfig::default(),
        }
    }

    /// Loads roles from a JSON file at build time.
    pub fn roles_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = RoleSource::File(path.into());
        self
    }

    /// Loads roles from a JSON string at build time.
    pub fn roles_json(mut self, json: impl Into<String>) -> Self {
        self.source = RoleSource::Json(json.into());
        self
    }

    /// Sets the lobby configuration.
    pub fn config(mut self, config: LobbyConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the catalog and opens the lobby.
    ///
    /// With no role source the pool is empty: the game starts as soon as
    /// the master joins.
    ///
    /// # Errors
    /// [`LupusError::Config`] if `master_name` is blank, since no requested
    /// name could then reach the master seat. [`LupusError::Catalog`] if the
    /// roles fail to load.
    pub fn build(self) -> Result<Lobby<MemoryCatalog>, LupusError> {
        if self.config.master_name.trim().is_empty() {
            return Err(LupusError::Config("master_name is empty".into()));
        }
        let catalog = match self.source {
            RoleSource::Empty => MemoryCatalog::new(Vec::new(), Vec::new())?,
            RoleSource::File(path) => MemoryCatalog::from_path(path)?,
            RoleSource::Json(json) => MemoryCatalog::from_json(&json)?,
        };
        Ok(Lobby::new(catalog, self.config))
    }
}

impl Default for LobbyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
