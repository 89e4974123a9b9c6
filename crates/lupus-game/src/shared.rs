//! A game shared between concurrent callers.
//!
//! `Game` is plain data with `&mut self` mutators. When several connection
//! tasks admit into the same lobby, they go through a `SharedGame`: one
//! write lock per session serializes admissions, and queries take the read
//! lock, so nobody sees a game halfway through an admission (master set but
//! the game not yet started, for instance).

use std::sync::Arc;

use lupus_catalog::{RoleCatalog, RoleId};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::{Admission, Game, GameError, GameInfo, Identity};

/// A [`Game`] behind an async read/write lock.
///
/// Cheap to clone: every clone points at the same session.
pub struct SharedGame<C: RoleCatalog> {
    inner: Arc<RwLock<Game<C>>>,
}

impl<C: RoleCatalog> Clone for SharedGame<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: RoleCatalog> SharedGame<C> {
    /// Opens a new lobby backed by `catalog`.
    pub fn new(catalog: C) -> Self {
        Self::from_game(Game::new(catalog))
    }

    /// Wraps an existing game.
    pub fn from_game(game: Game<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(game)),
        }
    }

    /// Admits under the write lock. See [`Game::admit`].
    pub async fn admit(&self, identity: Identity, admission: Admission) -> bool {
        self.inner.write().await.admit(identity, admission)
    }

    /// Why an admission would fail right now, if it would.
    pub async fn check_admission(
        &self,
        identity: &Identity,
        admission: &Admission,
    ) -> Result<(), GameError> {
        self.inner.read().await.check_admission(identity, admission)
    }

    /// See [`Game::finish`].
    pub async fn finish(&self) -> bool {
        self.inner.write().await.finish()
    }

    /// See [`Game::mark_dead`].
    pub async fn mark_dead(&self, identity: &Identity) -> bool {
        self.inner.write().await.mark_dead(identity)
    }

    /// Read access for queries not mirrored below.
    ///
    /// Admissions wait while the guard is held; drop it promptly.
    pub async fn read(&self) -> RwLockReadGuard<'_, Game<C>> {
        self.inner.read().await
    }

    pub async fn is_registered(&self, identity: &Identity) -> bool {
        self.inner.read().await.is_registered(identity)
    }

    pub async fn name_of(&self, identity: &Identity) -> String {
        self.inner.read().await.name_of(identity).to_string()
    }

    pub async fn role_of(&self, identity: &Identity) -> Result<RoleId, GameError> {
        self.inner.read().await.role_of(identity).cloned()
    }

    pub async fn players_similar_to(
        &self,
        identity: &Identity,
    ) -> Result<Vec<Identity>, GameError> {
        self.inner.read().await.players_similar_to(identity)
    }

    pub async fn all_names(&self) -> Vec<String> {
        let game = self.inner.read().await;
        game.all_names().into_iter().map(String::from).collect()
    }

    pub async fn lobby_progress_percent(&self) -> u32 {
        self.inner.read().await.lobby_progress_percent()
    }

    pub async fn has_started(&self) -> bool {
        self.inner.read().await.has_started()
    }

    pub async fn has_finished(&self) -> bool {
        self.inner.read().await.has_finished()
    }

    pub async fn info(&self) -> GameInfo {
        self.inner.read().await.info()
    }
}
