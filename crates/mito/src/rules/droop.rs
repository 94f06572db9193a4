//! Vertical sag of cells and structural support.

use crate::api::TileApi;
use crate::direction::Direction;
use crate::tile::TileKind;

/// Sag added every step.
pub const DROOP_RATE: f64 = 0.04;
/// Extra sag for a cell with nothing below and no cell beside it.
pub const FREEFALL_DROOP: f64 = 0.5;
/// Sag at which a cell drops one row.
pub const DROOP_RELOCATE_THRESHOLD: f64 = 0.5;

/// Update the stepped cell's `droop_y` from the tiles below and beside it.
///
/// Rock or soil below grounds the cell. A cell below caps the sag at its own,
/// then sag is averaged with east and west cell neighbors.
pub fn settle(api: &mut TileApi) {
    let Some(mut droop) = api.me().as_cell().map(|cell| cell.droop_y + DROOP_RATE) else {
        return;
    };

    let mut supported = false;
    for dir in Direction::BELOW {
        match api.get(dir).kind {
            TileKind::Rock | TileKind::Soil(_) | TileKind::Fountain(_) => {
                if let Some(cell) = api.cell_mut() {
                    cell.droop_y = 0.0;
                }
                return;
            }
            TileKind::Cell(below) => {
                droop = droop.min(below.droop_y);
                supported = true;
            }
            _ => {}
        }
    }

    let mut sum = droop;
    let mut count = 1;
    for dir in [Direction::W, Direction::E] {
        if let Some(side) = api.get(dir).as_cell() {
            sum += side.droop_y;
            count += 1;
        }
    }
    droop = if !supported && count == 1 {
        droop + FREEFALL_DROOP
    } else {
        sum / f64::from(count)
    };

    if let Some(cell) = api.cell_mut() {
        cell.droop_y = droop;
    }
}
