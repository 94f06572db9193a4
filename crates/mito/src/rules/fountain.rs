//! Fountain: soil that keeps refilling itself.

use crate::api::TileApi;
use crate::tile::Tile;

/// Add one unit of water while more than one unit of space remains.
pub fn top_up(api: &mut TileApi) {
    if let Some(inv) = api.me_mut().and_then(Tile::inventory_mut) {
        if inv.space() > 1.0 {
            inv.change(1.0, 0.0);
        }
    }
}
