//! Game lifecycle state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle state of a game.
///
/// ```text
/// Init → WaitingForPlayers → Started → Finished
/// ```
///
/// - **Init**: Being set up. A new game leaves it before construction
///   returns; the start trigger passes through it again while reseating.
/// - **WaitingForPlayers**: Lobby open. The only phase that admits.
/// - **Started**: Every role handed out and the master present. Seating
///   order is final.
/// - **Finished**: Ended by round logic outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Init,
    WaitingForPlayers,
    Started,
    Finished,
}

impl GamePhase {
    /// Returns `true` if the lobby accepts admissions.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::WaitingForPlayers)
    }

    /// The phase that follows this one, or `None` after `Finished`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Init => Some(Self::WaitingForPlayers),
            Self::WaitingForPlayers => Some(Self::Started),
            Self::Started => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns `true` if `target` directly follows this phase.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "Init"),
            Self::WaitingForPlayers => write!(f, "WaitingForPlayers"),
            Self::Started => write!(f, "Started"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}
