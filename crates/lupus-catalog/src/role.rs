//! Role identity and metadata types.
//!
//! These are the shapes found in a role file. A [`RoleId`] is all a game
//! session keeps; the rest of [`RoleDefinition`] stays in the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoleId
// ---------------------------------------------------------------------------

/// The identifier of a role, e.g. `"werewolf"`.
///
/// Opaque to the game session: it is compared for equality and handed back
/// to the catalog, nothing else. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl RoleId {
    /// Creates a role id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// RoleDefinition
// ---------------------------------------------------------------------------

/// Everything the catalog knows about one role.
///
/// Only `id` is required in a role file. Text fields default to empty and
/// `visible_to_similars` defaults to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Unique id, referenced by the role pool.
    pub id: RoleId,

    /// Display name shown to players.
    #[serde(default)]
    pub name: String,

    /// Rule descriptions, one paragraph per entry.
    #[serde(default)]
    pub descriptions: Vec<String>,

    /// The short text shown to the player who holds the role.
    #[serde(default)]
    pub player_description: String,

    /// Team the role plays for (e.g. `"wolves"`, `"village"`).
    #[serde(default)]
    pub team: String,

    /// Race of the role (e.g. `"human"`, `"beast"`).
    #[serde(default)]
    pub race: String,

    /// Path or URL of the role card image.
    #[serde(default)]
    pub image: String,

    /// Whether holders of this role can see each other.
    #[serde(default)]
    pub visible_to_similars: bool,
}

impl RoleDefinition {
    /// Creates a definition with only an id and a display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RoleId::new(id),
            name: name.into(),
            descriptions: Vec::new(),
            player_description: String::new(),
            team: String::new(),
            race: String::new(),
            image: String::new(),
            visible_to_similars: false,
        }
    }

    /// Marks the role as visible to other holders of the same role.
    pub fn visible_to_similars(mut self, visible: bool) -> Self {
        self.visible_to_similars = visible;
        self
    }

    /// Sets the team.
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }
}

// ---------------------------------------------------------------------------
// RoleFile
// ---------------------------------------------------------------------------

/// The on-disk shape of a role file.
///
/// ```json
/// {
///   "roles": [{ "id": "werewolf", "name": "Werewolf", "visible_to_similars": true }],
///   "available": ["werewolf", "werewolf"]
/// }
/// ```
///
/// `available` is the ordered role pool for one game: its length is the
/// number of players the lobby waits for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFile {
    /// All known role definitions.
    pub roles: Vec<RoleDefinition>,

    /// The role pool, in hand-out order. Ids may repeat.
    #[serde(default)]
    pub available: Vec<RoleId>,
}
