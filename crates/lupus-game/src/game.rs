//! The game session: lobby rules, role hand-out and the start trigger.

use std::fmt;

use indexmap::IndexMap;
use lupus_catalog::{RoleCatalog, RoleId};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::{Admission, GameError, GamePhase, Identity, Player};

/// The name reported for the master, and refused as a player name.
pub const MASTER_NAME: &str = "master";

/// What [`Game::name_of`] returns for an identity it does not know.
pub const UNKNOWN_NAME: &str = "UnknownName";

// ---------------------------------------------------------------------------
// LobbyProgress
// ---------------------------------------------------------------------------

/// How full the lobby is, as a floored percentage. Displays as `"33%"`.
///
/// Counts the master seat as one slot whether or not it is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LobbyProgress(pub u32);

impl fmt::Display for LobbyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ---------------------------------------------------------------------------
// GameInfo
// ---------------------------------------------------------------------------

/// A serializable snapshot of a game, for whatever renders the lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub phase: GamePhase,
    /// Same order as [`Game::all_names`].
    pub names: Vec<String>,
    pub player_count: usize,
    pub pool_size: usize,
    pub master_assigned: bool,
    pub progress: LobbyProgress,
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// One game session.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ [WaitingForPlayers] ──admit()…──→ [Started] ──finish()──→ [Finished]
/// ```
///
/// The game starts on whichever admission completes the pair "every role
/// handed out" and "master present". Roles go out in pool order; the
/// seating order is shuffled once, at the start.
///
/// Not thread-safe by itself. Wrap it in a [`SharedGame`](crate::SharedGame)
/// to serve concurrent callers.
pub struct Game<C: RoleCatalog> {
    phase: GamePhase,
    catalog: C,
    /// Fixed at creation. Its length is the number of player seats.
    role_pool: Vec<RoleId>,
    /// Seating order: admission order until the start, shuffled after.
    players: IndexMap<Identity, Player>,
    master: Option<Identity>,
    /// Number of roles handed out so far.
    next_role: usize,
}

impl<C: RoleCatalog> Game<C> {
    /// Opens a new lobby with the catalog's available roles as the pool.
    pub fn new(catalog: C) -> Self {
        let mut game = Self {
            phase: GamePhase::Init,
            role_pool: catalog.available_roles(),
            catalog,
            players: IndexMap::new(),
            master: None,
            next_role: 0,
        };
        game.phase = GamePhase::WaitingForPlayers;

        tracing::info!(pool = game.role_pool.len(), "lobby opened");
        game
    }

    // -- Admission --------------------------------------------------------

    /// Checks whether `admission` would succeed, without changing anything.
    ///
    /// # Errors
    /// The first matching reason, checked in this order:
    /// - [`GameError::NotJoinable`]: the lobby is not open
    /// - [`GameError::AlreadyRegistered`]: `identity` already joined
    /// - [`GameError::MasterTaken`]: a second master
    /// - [`GameError::EmptyName`], [`GameError::ReservedName`],
    ///   [`GameError::NameTaken`]: unusable player name
    /// - [`GameError::PoolExhausted`]: no player seat left
    pub fn check_admission(
        &self,
        identity: &Identity,
        admission: &Admission,
    ) -> Result<(), GameError> {
        if !self.phase.is_joinable() {
            return Err(GameError::NotJoinable(self.phase));
        }
        if self.is_registered(identity) {
            return Err(GameError::AlreadyRegistered(identity.clone()));
        }

        match admission {
            // The master seat never depends on the pool.
            Admission::AsMaster => {
                if self.master.is_some() {
                    return Err(GameError::MasterTaken);
                }
            }
            Admission::AsPlayer(name) => {
                if name.is_empty() {
                    return Err(GameError::EmptyName);
                }
                if same_name(name, MASTER_NAME) {
                    return Err(GameError::ReservedName(name.clone()));
                }
                if self.players.values().any(|p| same_name(p.name(), name)) {
                    return Err(GameError::NameTaken(name.clone()));
                }
                if self.all_players_assigned() {
                    return Err(GameError::PoolExhausted(self.role_pool.len()));
                }
            }
        }

        Ok(())
    }

    /// Admits `identity` as the master or as a player.
    ///
    /// Returns `true` if the identity is now registered. On `false`
    /// nothing changed; see [`check_admission`](Self::check_admission) for
    /// the reasons. May start the game.
    pub fn admit(&mut self, identity: Identity, admission: Admission) -> bool {
        self.admit_with_rng(identity, admission, &mut rand::rng())
    }

    /// Same as [`admit`](Self::admit), drawing the reseating shuffle from `rng`.
    pub fn admit_with_rng<R: Rng + ?Sized>(
        &mut self,
        identity: Identity,
        admission: Admission,
        rng: &mut R,
    ) -> bool {
        if let Err(reason) = self.check_admission(&identity, &admission) {
            tracing::debug!(%identity, %reason, "admission rejected");
            return false;
        }

        match admission {
            Admission::AsMaster => {
                tracing::info!(%identity, "master assigned");
                self.master = Some(identity);

                // Players may have filled the pool before the master came.
                if self.all_players_assigned() {
                    self.start(rng);
                }
            }
            Admission::AsPlayer(name) => {
                let role = self.role_pool[self.next_role].clone();
                self.next_role += 1;

                tracing::info!(
                    %identity,
                    %name,
                    seat = self.players.len(),
                    remaining = self.role_pool.len() - self.next_role,
                    "player admitted"
                );

                self.players.insert(identity, Player::new(name, role));

                // Only the admission that fills the last seat can start here.
                if self.all_players_assigned() && self.master_assigned() {
                    self.start(rng);
                }
            }
        }

        true
    }

    /// Reseats everyone in random order and moves to `Started`.
    ///
    /// Reached at most once: both call sites require the lobby to be open,
    /// and this leaves it closed.
    fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug_assert!(self.phase.can_transition_to(GamePhase::Started));

        self.phase = GamePhase::Init;
        let mut seating: Vec<(Identity, Player)> = self.players.drain(..).collect();
        seating.shuffle(rng);
        self.players = seating.into_iter().collect();
        self.phase = GamePhase::Started;

        tracing::info!(players = self.players.len(), "game started");
    }

    // -- Post-start mutation ---------------------------------------------

    /// Moves a started game to `Finished`. Returns `false` in any other phase.
    pub fn finish(&mut self) -> bool {
        if !self.phase.can_transition_to(GamePhase::Finished) {
            tracing::debug!(phase = %self.phase, "finish ignored");
            return false;
        }
        self.phase = GamePhase::Finished;
        tracing::info!("game finished");
        true
    }

    /// Marks a player dead. Returns `true` if a living player of a started
    /// game was killed.
    pub fn mark_dead(&mut self, identity: &Identity) -> bool {
        if self.phase != GamePhase::Started {
            return false;
        }
        let Some(player) = self.players.get_mut(identity) else {
            return false;
        };
        if !player.is_alive() {
            return false;
        }
        player.kill();
        tracing::info!(%identity, "player died");
        true
    }

    // -- Queries ----------------------------------------------------------

    /// Returns `true` if `identity` is the master or a player.
    pub fn is_registered(&self, identity: &Identity) -> bool {
        self.is_master(identity) || self.players.contains_key(identity)
    }

    pub fn is_master(&self, identity: &Identity) -> bool {
        self.master.as_ref() == Some(identity)
    }

    /// Display name of `identity`: [`MASTER_NAME`] for the master, the
    /// chosen name for a player, [`UNKNOWN_NAME`] otherwise.
    pub fn name_of(&self, identity: &Identity) -> &str {
        if self.is_master(identity) {
            return MASTER_NAME;
        }
        self.player(identity)
            .map(Player::name)
            .unwrap_or(UNKNOWN_NAME)
    }

    /// The player record of `identity`, if seated.
    pub fn player(&self, identity: &Identity) -> Option<&Player> {
        self.players.get(identity)
    }

    /// Role of a seated player.
    ///
    /// # Errors
    /// [`GameError::NotAPlayer`] for unknown identities and for the master.
    pub fn role_of(&self, identity: &Identity) -> Result<&RoleId, GameError> {
        self.player(identity)
            .map(Player::role)
            .ok_or_else(|| GameError::NotAPlayer(identity.clone()))
    }

    /// Other players holding the same role, in seating order, if the
    /// catalog lets holders of that role see each other. Empty otherwise.
    ///
    /// # Errors
    /// [`GameError::NotAPlayer`] if `identity` is not seated.
    pub fn players_similar_to(
        &self,
        identity: &Identity,
    ) -> Result<Vec<Identity>, GameError> {
        let role = self.role_of(identity)?;
        if !self.catalog.is_visible_for_similars(role) {
            return Ok(Vec::new());
        }

        Ok(self
            .players
            .iter()
            .filter(|&(id, p)| id != identity && p.role() == role)
            .map(|(id, _)| id.clone())
            .collect())
    }

    /// Every player name in seating order, then [`MASTER_NAME`] if the
    /// master has joined.
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.players.values().map(Player::name).collect();
        if self.master.is_some() {
            names.push(MASTER_NAME);
        }
        names
    }

    /// Registered participants over available seats (pool plus master).
    pub fn lobby_progress(&self) -> LobbyProgress {
        let joined = self.players.len() + usize::from(self.master.is_some());
        let seats = self.role_pool.len() + 1;
        LobbyProgress((joined * 100 / seats) as u32)
    }

    /// [`lobby_progress`](Self::lobby_progress) as a bare number.
    pub fn lobby_progress_percent(&self) -> u32 {
        self.lobby_progress().0
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.phase == GamePhase::Started
    }

    pub fn has_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Returns `true` once every role in the pool has been handed out.
    pub fn all_players_assigned(&self) -> bool {
        self.next_role == self.role_pool.len()
    }

    pub fn master_assigned(&self) -> bool {
        self.master.is_some()
    }

    pub fn master(&self) -> Option<&Identity> {
        self.master.as_ref()
    }

    /// Players in seating order.
    pub fn players(&self) -> impl Iterator<Item = (&Identity, &Player)> {
        self.players.iter()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The role pool, exactly as the catalog gave it.
    pub fn role_pool(&self) -> &[RoleId] {
        &self.role_pool
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Snapshot for rendering.
    pub fn info(&self) -> GameInfo {
        GameInfo {
            phase: self.phase,
            names: self.all_names().into_iter().map(String::from).collect(),
            player_count: self.players.len(),
            pool_size: self.role_pool.len(),
            master_assigned: self.master.is_some(),
            progress: self.lobby_progress(),
        }
    }

    // -- Catalog pass-throughs -------------------------------------------

    pub fn descriptions_of(&self, role: &RoleId) -> Option<&[String]> {
        self.catalog.descriptions_of(role)
    }

    pub fn role_name_of(&self, role: &RoleId) -> Option<&str> {
        self.catalog.role_name_of(role)
    }

    pub fn race_of(&self, role: &RoleId) -> Option<&str> {
        self.catalog.race_of(role)
    }

    pub fn team_of(&self, role: &RoleId) -> Option<&str> {
        self.catalog.team_of(role)
    }

    pub fn is_visible_for_similars(&self, role: &RoleId) -> bool {
        self.catalog.is_visible_for_similars(role)
    }

    pub fn player_description_of(&self, role: &RoleId) -> Option<&str> {
        self.catalog.player_description_of(role)
    }

    pub fn image_path_of(&self, role: &RoleId) -> Option<&str> {
        self.catalog.image_path_of(role)
    }
}

/// Case-insensitive name comparison.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// =========================================================================
// Tests
// =========================================================================
