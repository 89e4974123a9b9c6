//! Unified error type for Lupus.

use lupus_catalog::CatalogError;
use lupus_game::GameError;

/// Top-level error that wraps the error of each layer.
///
/// `#[from]` on each variant lets `?` lift a layer error into this one.
#[derive(Debug, thiserror::Error)]
pub enum LupusError {
    /// Loading or validating the role catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A game operation was refused.
    #[error(transparent)]
    Game(#[from] GameError),

    /// The lobby configuration cannot produce a playable lobby.
    #[error("invalid lobby config: {0}")]
    Config(String),
}
