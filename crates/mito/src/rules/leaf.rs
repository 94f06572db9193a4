//! Leaf: turns tissue water into sugar using light and CO2 from the air
//! on the opposite side.

use rand::Rng;
use tracing::trace;

use crate::api::TileApi;
use crate::direction::Direction;
use crate::tile::{Air, CellKind, LeafReading, Tile, Variant};

/// Chance of a synthesis roll succeeding under full sunlight.
pub const LEAF_MAX_CHANCE: f64 = 0.01;

/// Scan each air/tissue pair straddling the leaf. Every pair rolls for
/// synthesis with probability `sunlight * LEAF_MAX_CHANCE`; a success costs
/// `1 / co2` water from the tissue for one sugar. At most one sugar per step.
pub fn photosynthesize(api: &mut TileApi) {
    let height = api.world.height as i32;
    let mut efficiency = 0.0;
    let mut speed = 0.0;
    let mut pairs = 0u32;

    for dir in Direction::ALL {
        let Some(air) = api.get(dir).as_air().copied() else {
            continue;
        };
        if api.get(dir.opposite()).variant() != Variant::Tissue {
            continue;
        }
        let sunlight = air.sunlight();
        let co2 = Air::co2(api.pos.step(dir).y, height);
        efficiency += co2;
        speed += sunlight;
        pairs += 1;

        if api.world.rng.gen::<f64>() < sunlight * LEAF_MAX_CHANCE {
            let needed_water = 1.0 / co2;
            let tissue = api.pos.step(dir.opposite());
            if let Some(inv) = api.world.tile_mut(tissue).and_then(Tile::inventory_mut) {
                if inv.water() >= needed_water {
                    inv.change(-needed_water, 1.0);
                    trace!(%tissue, needed_water, "leaf made sugar");
                    break;
                }
            }
        }
    }

    if pairs > 0 {
        efficiency /= f64::from(pairs);
        speed /= f64::from(pairs);
    }
    if let Some(CellKind::Leaf(reading)) = api.cell_mut().map(|cell| &mut cell.kind) {
        *reading = LeafReading { efficiency, speed };
    }
}
