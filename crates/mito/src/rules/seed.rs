//! Seed: hoards every bit of sugar around it.

use crate::api::TileApi;
use crate::direction::Direction;

/// Pull all sugar from each neighboring inventory into the seed's own.
pub fn hoard_sugar(api: &mut TileApi) {
    let me = api.pos;
    for dir in Direction::ALL {
        let Some((neighbor, seed)) = api.world.pair_mut(me.step(dir), me) else {
            continue;
        };
        if let (Some(src), Some(dst)) = (neighbor.inventory_mut(), seed.inventory_mut()) {
            let sugar = src.sugar();
            src.give(dst, 0.0, sugar);
        }
    }
}
