//! Error types for the catalog layer.

use crate::RoleId;

/// Errors that can occur while building a catalog.
///
/// Lookups on a built catalog never fail; they return `None` for an
/// unknown role. Everything here happens at load time.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The role file could not be read.
    #[error("failed to read role file: {0}")]
    Io(#[from] std::io::Error),

    /// The role file is not valid JSON or has the wrong shape.
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The role pool names a role that has no definition.
    #[error("role {0} is in the pool but not defined")]
    UnknownRole(RoleId),

    /// Two definitions share the same id.
    #[error("role {0} is defined more than once")]
    DuplicateRole(RoleId),
}
