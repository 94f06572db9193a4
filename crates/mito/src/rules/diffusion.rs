//! Water equalization between same-variant inventories.

use crate::api::TileApi;
use crate::direction::Direction;

/// Pull water from richer neighbors of the same variant.
///
/// Each richer peer gives `floor((peer - me) / (peers + 1))`. Water never flows
/// to a poorer neighbor here; those neighbors pull on their own step.
pub fn pull_water(api: &mut TileApi) {
    let me = api.me();
    if me.inventory().is_none() {
        return;
    }
    let variant = me.variant();
    let is_peer = |dir: &Direction| {
        let tile = api.get(*dir);
        tile.variant() == variant && tile.inventory().is_some()
    };
    let peers = Direction::ALL.into_iter().filter(is_peer).count();
    if peers == 0 {
        return;
    }
    let share = (peers + 1) as f64;

    for dir in Direction::ALL {
        let from = api.pos.step(dir);
        let Some((peer, this)) = api.world.pair_mut(from, me.pos) else {
            continue;
        };
        if peer.variant() != variant {
            continue;
        }
        let (Some(src), Some(dst)) = (peer.inventory_mut(), this.inventory_mut()) else {
            continue;
        };
        if src.water() > dst.water() {
            let diff = ((src.water() - dst.water()) / share).floor();
            src.give(dst, diff, 0.0);
        }
    }
}
