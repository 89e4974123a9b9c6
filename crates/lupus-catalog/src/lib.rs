//! Role catalog for Lupus.
//!
//! The catalog is the read-only source of everything descriptive about a
//! role: its display name, descriptions, team, race, image and whether
//! players holding it get to see each other. A game session only ever
//! stores [`RoleId`]s and asks the catalog when it needs more.
//!
//! # Key types
//!
//! - [`RoleCatalog`]: the lookup trait a game session consumes
//! - [`MemoryCatalog`]: a catalog held in memory, loaded from a JSON role file
//! - [`RoleDefinition`]: one role's metadata
//! - [`RoleFile`]: the on-disk shape of a role file

mod catalog;
mod error;
mod memory;
mod role;

pub use catalog::RoleCatalog;
pub use error::CatalogError;
pub use memory::MemoryCatalog;
pub use role::{RoleDefinition, RoleFile, RoleId};
