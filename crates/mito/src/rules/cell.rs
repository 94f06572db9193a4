//! Shared step for every member of the cell family: upkeep, metabolism,
//! feeding, energy sharing, droop relocation and death.

use tracing::debug;

use crate::api::TileApi;
use crate::direction::Direction;
use crate::rules::droop::{self, DROOP_RELOCATE_THRESHOLD};
use crate::rules::{diffusion, light};
use crate::tile::{Tile, CELL_ENERGY_MAX, ENERGY_TO_SUGAR_RATIO};

/// Energy burned every step.
pub const UPKEEP: f64 = 1.0;

/// Step the cell at `api.pos`. Returns false if it died (it is now a DeadCell),
/// otherwise `api.pos` is where the cell lives after any relocation.
pub fn step_cell(api: &mut TileApi) -> bool {
    light::update_darkness(api);
    diffusion::pull_water(api);

    let Some(cell) = api.cell_mut() else {
        return false;
    };
    cell.energy -= UPKEEP;
    let energy = cell.energy;
    cell.metabolism.advance(energy);

    if cell.metabolism.is_eating() {
        feed(api);
        if energy_of(api) < CELL_ENERGY_MAX {
            share_energy(api);
        }
    }

    droop::settle(api);
    let droop_y = api.me().as_cell().map_or(0.0, |cell| cell.droop_y);
    if droop_y > DROOP_RELOCATE_THRESHOLD {
        let from = api.pos;
        if api.relocate(Direction::S, Tile::air(from)) {
            if let Some(cell) = api.cell_mut() {
                cell.droop_y -= 1.0;
            }
            debug!(%from, to = %api.pos, "cell drooped a row");
        }
    }

    if energy_of(api) <= 0.0 {
        debug!(pos = %api.pos, variant = %api.me().variant(), "cell starved");
        api.replace_me(Tile::dead_cell(api.pos));
        return false;
    }
    true
}

fn energy_of(api: &TileApi) -> f64 {
    api.me().energy().unwrap_or(0.0)
}

/// Turn sugar into energy, scanning the 8 neighbors then the cell itself.
///
/// Tiles without an inventory are passed over. The scan stops at the first
/// inventory that cannot cover the remaining want.
fn feed(api: &mut TileApi) {
    let me = api.pos;
    let sources = Direction::ALL.map(|dir| me.step(dir));

    for src in sources.into_iter().chain(std::iter::once(me)) {
        let energy = energy_of(api);
        if energy >= CELL_ENERGY_MAX {
            break;
        }
        let want = (CELL_ENERGY_MAX - energy) / ENERGY_TO_SUGAR_RATIO;
        let Some(inv) = api.world.tile_mut(src).and_then(Tile::inventory_mut) else {
            continue;
        };
        let sugar = want.min(inv.sugar());
        inv.change(0.0, -sugar);
        if let Some(cell) = api.cell_mut() {
            cell.energy = (cell.energy + sugar * ENERGY_TO_SUGAR_RATIO).min(CELL_ENERGY_MAX);
        }
        if sugar < want {
            break;
        }
    }
}

/// Take half the difference from each neighbor cell richer than this one.
///
/// # Panics
///
/// If a transfer would leave the neighbor negative or push this cell past
/// `CELL_ENERGY_MAX`. Either means the rule itself is broken.
fn share_energy(api: &mut TileApi) {
    let me = api.pos;
    for dir in Direction::ALL {
        let Some((neighbor, this)) = api.world.pair_mut(me.step(dir), me) else {
            continue;
        };
        let (Some(giver), Some(taker)) = (neighbor.as_cell_mut(), this.as_cell_mut()) else {
            continue;
        };
        if taker.energy >= CELL_ENERGY_MAX {
            break;
        }
        if giver.energy > taker.energy {
            let transfer = ((giver.energy - taker.energy) / 2.0).floor();
            assert!(
                giver.energy - transfer >= 0.0,
                "energy sharing took {transfer} from a neighbor holding {}",
                giver.energy
            );
            assert!(
                taker.energy + transfer <= CELL_ENERGY_MAX,
                "energy sharing pushed {} + {transfer} past the cap",
                taker.energy
            );
            taker.energy += transfer;
            giver.energy -= transfer;
        }
    }
}
