//! Per-variant step rules dispatched from the tick loop.

pub mod cell;
pub mod diffusion;
pub mod droop;
mod fountain;
mod growth;
mod leaf;
pub mod light;
mod root;
mod seed;

#[cfg(test)]
mod scenario_test;

use crate::api::TileApi;
use crate::tile::Variant;

/// Dispatch to the update rules for the stepped tile's variant.
///
/// Cell specializations run after the shared cell step, and only if the cell
/// survived it.
pub fn step_tile(api: &mut TileApi) {
    match api.me().variant() {
        Variant::Air => {}
        Variant::Rock | Variant::Soil | Variant::DeadCell => step_ground(api),
        Variant::Fountain => {
            step_ground(api);
            fountain::top_up(api);
        }
        variant @ (Variant::Cell
        | Variant::Tissue
        | Variant::Leaf
        | Variant::Root
        | Variant::Seed) => {
            if !cell::step_cell(api) {
                return;
            }
            match variant {
                Variant::Leaf => leaf::photosynthesize(api),
                Variant::Root => root::pump_water(api),
                Variant::Seed => seed::hoard_sugar(api),
                _ => {}
            }
        }
    }
}

/// The generic tile step: light, then water.
fn step_ground(api: &mut TileApi) {
    light::update_darkness(api);
    diffusion::pull_water(api);
}

#[cfg(test)]
pub(crate) fn world_from_rows(rows: &[&str]) -> crate::World {
    use crate::direction::Position;
    use crate::tile::{CellKind, Tile};

    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut world = crate::World::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let tile = match ch {
                '#' => Tile::rock(pos),
                's' => Tile::soil(pos, 0.0),
                'f' => Tile::fountain(pos, 0.0),
                'x' => Tile::dead_cell(pos),
                'c' => Tile::cell(pos, CellKind::Plain),
                't' => Tile::cell(pos, CellKind::tissue()),
                'l' => Tile::cell(pos, CellKind::leaf()),
                'r' => Tile::cell(pos, CellKind::Root),
                'e' => Tile::cell(pos, CellKind::seed()),
                _ => Tile::air(pos),
            };
            world.set_tile_at(pos, tile);
        }
    }
    world
}
