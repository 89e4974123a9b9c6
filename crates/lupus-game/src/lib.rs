//! Game session state machine for Lupus.
//!
//! A [`Game`] is one sitting of a social deduction game. It admits
//! identities as players (each handed the next role from the pool) or as
//! the single master, and starts itself once every role is handed out and
//! the master is present. Starting reseats the players in random order.
//!
//! # Key types
//!
//! - [`Game`]: the session state machine
//! - [`SharedGame`]: a `Game` behind a read/write lock, cheap to clone
//! - [`GamePhase`]: lifecycle state
//! - [`Admission`]: "join as master" or "join as player with this name"
//! - [`Player`]: a seated player's record
//!
//! # How it fits in the stack
//!
//! ```text
//! Admission boundary (lupus crate)  ← turns a raw requested name into an Admission
//!     ↕
//! Game (this crate)  ← lobby rules, role hand-out, start trigger
//!     ↕
//! Role catalog (lupus-catalog)  ← role pool and role metadata
//! ```

mod error;
mod game;
mod phase;
mod player;
mod shared;

pub use error::GameError;
pub use game::{Game, GameInfo, LobbyProgress, MASTER_NAME, UNKNOWN_NAME};
pub use phase::GamePhase;
pub use player::{Admission, Identity, Player};
pub use shared::SharedGame;
