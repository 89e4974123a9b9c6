//! Error types for the game layer.

use crate::{GamePhase, Identity};

/// Reasons a game operation was refused.
///
/// Admission rejections are routine lobby events: [`Game::admit`](crate::Game::admit)
/// reports them as `false` and logs the variant. They are exposed here
/// through [`Game::check_admission`](crate::Game::check_admission) for
/// callers that want to tell the user why.
///
/// [`NotAPlayer`](Self::NotAPlayer) is different: it means a caller asked
/// for a player-only fact about someone who is not seated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The lobby is not open in this phase.
    #[error("cannot join a game in phase {0}")]
    NotJoinable(GamePhase),

    /// The identity already joined, as a player or as the master.
    #[error("{0} is already registered")]
    AlreadyRegistered(Identity),

    /// The requested name is empty.
    #[error("player name must not be empty")]
    EmptyName,

    /// Another player already uses this name (case-insensitive).
    #[error("name {0:?} is already taken")]
    NameTaken(String),

    /// The name is reserved for the master.
    #[error("name {0:?} is reserved")]
    ReservedName(String),

    /// The master seat is already filled.
    #[error("the master is already assigned")]
    MasterTaken,

    /// Every role in the pool has been handed out.
    #[error("all {0} player slots are taken")]
    PoolExhausted(usize),

    /// The identity is not a seated player.
    #[error("{0} is not a player in this game")]
    NotAPlayer(Identity),
}
