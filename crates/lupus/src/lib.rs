//! # Lupus
//!
//! Lobby formation and role assignment for social deduction party games
//! (Werewolf, Mafia and friends).
//!
//! Participants join a [`Lobby`] with a display name. Naming yourself
//! `master` takes the moderator seat; any other name takes a player seat
//! and the next role from the pool. Once every role is out and the master
//! is present, the game starts and the seating is shuffled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lupus::prelude::*;
//!
//! # async fn demo() -> Result<(), LupusError> {
//! let lobby = Lobby::builder()
//!     .roles_file("roles.json")
//!     .build()?;
//!
//! lobby.join("10.0.0.7", Some("Ada")).await;
//! lobby.join("10.0.0.9", Some("master")).await;
//! println!("{}% ready", lobby.game().lobby_progress_percent().await);
//! # Ok(())
//! # }
//! ```

mod admission;
mod error;
mod lobby;

pub use admission::LobbyConfig;
pub use error::LupusError;
pub use lobby::{Lobby, LobbyBuilder, RoleCard};

pub use lupus_catalog as catalog;
pub use lupus_game as game;

pub mod prelude {
    pub use crate::{Lobby, LobbyBuilder, LobbyConfig, LupusError, RoleCard};
    pub use lupus_catalog::{MemoryCatalog, RoleCatalog, RoleDefinition, RoleId};
    pub use lupus_game::{
        Admission, Game, GameError, GameInfo, GamePhase, Identity, Player, SharedGame,
    };
}
