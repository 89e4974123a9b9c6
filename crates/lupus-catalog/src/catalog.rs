//! The `RoleCatalog` trait, what a game session asks about roles.

use std::sync::Arc;

use crate::RoleId;

/// Read-only lookup of role metadata, keyed by [`RoleId`].
///
/// A game session calls [`available_roles`](Self::available_roles) once,
/// at creation, to get its role pool. Every other method is a plain
/// lookup the session forwards on behalf of its callers. Unknown roles
/// yield `None` (or `false`), never an error.
///
/// `Send + Sync + 'static` so a catalog can sit inside a session that is
/// shared across Tokio tasks.
pub trait RoleCatalog: Send + Sync + 'static {
    /// The ordered role pool for a new game. Ids may repeat.
    fn available_roles(&self) -> Vec<RoleId>;

    /// Rule descriptions of a role.
    fn descriptions_of(&self, role: &RoleId) -> Option<&[String]>;

    /// Display name of a role.
    fn role_name_of(&self, role: &RoleId) -> Option<&str>;

    /// Race of a role.
    fn race_of(&self, role: &RoleId) -> Option<&str>;

    /// Team of a role.
    fn team_of(&self, role: &RoleId) -> Option<&str>;

    /// Whether holders of this role see each other. `false` for unknown roles.
    fn is_visible_for_similars(&self, role: &RoleId) -> bool;

    /// Text shown to the player holding the role.
    fn player_description_of(&self, role: &RoleId) -> Option<&str>;

    /// Image path of the role card.
    fn image_path_of(&self, role: &RoleId) -> Option<&str>;
}

impl<T: RoleCatalog> RoleCatalog for Arc<T> {
    fn available_roles(&self) -> Vec<RoleId> {
        (**self).available_roles()
    }

    fn descriptions_of(&self, role: &RoleId) -> Option<&[String]> {
        (**self).descriptions_of(role)
    }

    fn role_name_of(&self, role: &RoleId) -> Option<&str> {
        (**self).role_name_of(role)
    }

    fn race_of(&self, role: &RoleId) -> Option<&str> {
        (**self).race_of(role)
    }

    fn team_of(&self, role: &RoleId) -> Option<&str> {
        (**self).team_of(role)
    }

    fn is_visible_for_similars(&self, role: &RoleId) -> bool {
        (**self).is_visible_for_similars(role)
    }

    fn player_description_of(&self, role: &RoleId) -> Option<&str> {
        (**self).player_description_of(role)
    }

    fn image_path_of(&self, role: &RoleId) -> Option<&str> {
        (**self).image_path_of(role)
    }
}
