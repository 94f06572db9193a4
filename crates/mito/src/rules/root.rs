//! Root: pumps soil water into tissue across itself.

use crate::api::TileApi;
use crate::direction::Direction;
use crate::tile::Variant;

/// Water moved per soil/tissue pair per step.
pub const ROOT_PUMP_RATE: f64 = 1.0;

/// For every soil neighbor whose mirrored neighbor is tissue, move one unit
/// of water from the soil to the tissue.
pub fn pump_water(api: &mut TileApi) {
    for dir in Direction::ALL {
        let paired = api.get(dir).variant().is_soil()
            && api.get(dir.opposite()).variant() == Variant::Tissue;
        if !paired {
            continue;
        }
        let soil = api.pos.step(dir);
        let tissue = api.pos.step(dir.opposite());
        let Some((from, to)) = api.world.pair_mut(soil, tissue) else {
            continue;
        };
        if let (Some(src), Some(dst)) = (from.inventory_mut(), to.inventory_mut()) {
            src.give(dst, ROOT_PUMP_RATE, 0.0);
        }
    }
}
