//! Who is at the table: identities, admissions and player records.

use std::fmt;

use lupus_catalog::RoleId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A stable, opaque token for one participant.
///
/// Whatever sits in front of the game (a socket address, a session id)
/// decides what goes in here. The game only hashes and compares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub String);

impl Identity {
    /// Creates an identity from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Admission
// ---------------------------------------------------------------------------

/// What a participant asks to join as.
///
/// The caller-facing layer decides this before the game sees the request,
/// so the game never inspects a display name to find the master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Admission {
    /// Take the master (moderator) seat. The master holds no role.
    AsMaster,

    /// Take a player seat under the given display name.
    AsPlayer(String),
}

impl Admission {
    /// Shorthand for `Admission::AsPlayer(name.into())`.
    pub fn player(name: impl Into<String>) -> Self {
        Self::AsPlayer(name.into())
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A seated player.
///
/// Name and role are fixed at admission. `alive` starts `true` and is the
/// only field that changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    alive: bool,
    role: RoleId,
}

impl Player {
    pub(crate) fn new(name: String, role: RoleId) -> Self {
        Self {
            name,
            alive: true,
            role,
        }
    }

    /// Display name chosen at admission.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role handed out at admission.
    pub fn role(&self) -> &RoleId {
        &self.role
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
