//! In-memory catalog backed by a role file.

use std::collections::HashMap;
use std::path::Path;

use crate::{CatalogError, RoleCatalog, RoleDefinition, RoleFile, RoleId};

/// A [`RoleCatalog`] holding every definition in a `HashMap`.
///
/// Built once from a [`RoleFile`] and immutable afterwards. Construction
/// checks that every pool entry refers to a defined role, so lookups made
/// by a game session on its own roles always hit.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    roles: HashMap<RoleId, RoleDefinition>,
    pool: Vec<RoleId>,
}

impl MemoryCatalog {
    /// Builds a catalog from definitions and a role pool.
    ///
    /// # Errors
    /// - [`CatalogError::DuplicateRole`] if two definitions share an id
    /// - [`CatalogError::UnknownRole`] if the pool names an undefined role
    pub fn new(
        definitions: Vec<RoleDefinition>,
        pool: Vec<RoleId>,
    ) -> Result<Self, CatalogError> {
        let mut roles = HashMap::with_capacity(definitions.len());
        for def in definitions {
            if roles.contains_key(&def.id) {
                return Err(CatalogError::DuplicateRole(def.id));
            }
            roles.insert(def.id.clone(), def);
        }

        if let Some(missing) = pool.iter().find(|id| !roles.contains_key(*id)) {
            return Err(CatalogError::UnknownRole(missing.clone()));
        }

        tracing::debug!(
            roles = roles.len(),
            pool = pool.len(),
            "role catalog built"
        );

        Ok(Self { roles, pool })
    }

    /// Builds a catalog from a parsed [`RoleFile`].
    pub fn from_role_file(file: RoleFile) -> Result<Self, CatalogError> {
        Self::new(file.roles, file.available)
    }

    /// Parses a JSON role file held in a string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: RoleFile = serde_json::from_str(json)?;
        Self::from_role_file(file)
    }

    /// Reads and parses a JSON role file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "loading role file");
        Self::from_json(&json)
    }

    /// Looks up a full definition.
    pub fn get(&self, role: &RoleId) -> Option<&RoleDefinition> {
        self.roles.get(role)
    }

    /// Number of distinct roles defined.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if no role is defined.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleCatalog for MemoryCatalog {
    fn available_roles(&self) -> Vec<RoleId> {
        self.pool.clone()
    }

    fn descriptions_of(&self, role: &RoleId) -> Option<&[String]> {
        self.get(role).map(|r| r.descriptions.as_slice())
    }

    fn role_name_of(&self, role: &RoleId) -> Option<&str> {
        self.get(role).map(|r| r.name.as_str())
    }

    fn race_of(&self, role: &RoleId) -> Option<&str> {
        self.get(role).map(|r| r.race.as_str())
    }

    fn team_of(&self, role: &RoleId) -> Option<&str> {
        self.get(role).map(|r| r.team.as_str())
    }

    fn is_visible_for_similars(&self, role: &RoleId) -> bool {
        self.get(role).is_some_and(|r| r.visible_to_similars)
    }

    fn player_description_of(&self, role: &RoleId) -> Option<&str> {
        self.get(role).map(|r| r.player_description.as_str())
    }

    fn image_path_of(&self, role: &RoleId) -> Option<&str> {
        self.get(role).map(|r| r.image.as_str())
    }
}
