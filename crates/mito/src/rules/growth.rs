//! Building new cells into neighboring air.

use tracing::{debug, trace};

use crate::direction::{Direction, Position};
use crate::error::{Error, Result};
use crate::tile::{CellKind, Tile, TileKind, CELL_SUGAR_BUILD_COST};
use crate::World;

impl World {
    /// Build a new cell of `kind` in the Air tile next to the cell at `from`.
    ///
    /// The build cost is paid from the first inventory, among the parent and
    /// then its neighbors in direction order, that holds enough sugar. Returns
    /// the new cell's position.
    ///
    /// # Errors
    ///
    /// [`Error::NotACell`] if `from` is not a living cell, [`Error::Occupied`]
    /// if the target is not Air, [`Error::InsufficientSugar`] if nobody can pay.
    /// Nothing changes on error.
    pub fn grow(&mut self, from: Position, dir: Direction, kind: CellKind) -> Result<Position> {
        if !self.tile(from).is_cell() {
            return Err(Error::NotACell(from));
        }
        let target = from.step(dir);
        let occupant = self.tile(target);
        if !matches!(occupant.kind, TileKind::Air(_)) {
            debug!(%from, %target, variant = %occupant.variant(), "growth blocked");
            return Err(Error::Occupied {
                pos: target,
                variant: occupant.variant(),
            });
        }

        let payer = std::iter::once(from)
            .chain(Direction::ALL.map(|d| from.step(d)))
            .find(|&pos| {
                self.tile(pos)
                    .inventory()
                    .is_some_and(|inv| inv.sugar() >= CELL_SUGAR_BUILD_COST)
            })
            .ok_or(Error::InsufficientSugar(from))?;

        if let Some(inv) = self.tile_mut(payer).and_then(Tile::inventory_mut) {
            inv.change(0.0, -CELL_SUGAR_BUILD_COST);
        }
        let child = Tile::cell(target, kind);
        trace!(%from, %target, variant = %child.variant(), %payer, "cell grown");
        self.set_tile_at(target, child);
        Ok(target)
    }
}
