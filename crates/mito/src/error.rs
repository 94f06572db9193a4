//! Recoverable error types.
//!
//! Broken resource invariants are bugs and panic instead; see `Inventory` and
//! the energy sharing rule.

use thiserror::Error;

use crate::direction::Position;
use crate::tile::Variant;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No living cell at {0}")]
    NotACell(Position),

    #[error("Cannot grow into {variant} at {pos}")]
    Occupied { pos: Position, variant: Variant },

    #[error("No inventory near {0} holds enough sugar to build a cell")]
    InsufficientSugar(Position),
}
