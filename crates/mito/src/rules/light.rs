//! Darkness propagation across non-cell tiles.

use crate::api::TileApi;
use crate::tile::{map_range, TileKind};

/// Darkness added per tile of distance at row `y`: 0.2 through the upper half
/// of the world, rising linearly to 1 at the bottom.
#[must_use]
pub fn contribution(y: i32, height: usize) -> f64 {
    let h = height as f64;
    map_range(f64::from(y), h / 2.0, h, 0.2, 1.0).max(0.2)
}

/// Recompute darkness from the neighbors. Air keeps 0, cells are always 0,
/// Rock neighbors block light and any cell neighbor lights the tile fully.
pub fn update_darkness(api: &mut TileApi) {
    let me = api.me();
    let darkness = match me.kind {
        TileKind::Air(_) => return,
        TileKind::Cell(_) => 0.0,
        _ => {
            let contrib = contribution(me.pos.y, api.world.height);
            let mut darkness = f64::INFINITY;
            for (_, neighbor) in api.neighbors().iter() {
                match neighbor.kind {
                    TileKind::Cell(_) => {
                        darkness = 0.0;
                        break;
                    }
                    TileKind::Rock => {}
                    _ => darkness = darkness.min(neighbor.darkness + contrib),
                }
            }
            darkness
        }
    };
    if let Some(tile) = api.me_mut() {
        tile.darkness = darkness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Position;
    use crate::rules::world_from_rows;
    use crate::tile::Tile;

    fn step_at(world: &mut crate::World, x: i32, y: i32) {
        let mut api = TileApi::new(world, Position::new(x, y), 1);
        update_darkness(&mut api);
    }

    #[test]
    fn contribution_floor_and_ramp() {
        assert_eq!(contribution(0, 100), 0.2);
        assert_eq!(contribution(50, 100), 0.2);
        assert!((contribution(75, 100) - 0.6).abs() < 1e-12);
        assert!(contribution(99, 100) < 1.0);
    }

    #[test]
    fn soil_under_air_takes_air_plus_contribution() {
        let mut world = world_from_rows(&["...", "sss", "sss"]);
        step_at(&mut world, 1, 1);
        let expected = contribution(1, 3);
        assert!((world.tile_at(1, 1).darkness - expected).abs() < 1e-12);
    }

    #[test]
    fn darkness_accumulates_with_depth() {
        let mut world = world_from_rows(&["...", "sss", "sss", "sss", "sss", "sss"]);
        for y in 1..6 {
            for x in 0..3 {
                step_at(&mut world, x, y);
            }
        }
        let d1 = world.tile_at(1, 1).darkness;
        let d3 = world.tile_at(1, 3).darkness;
        let d5 = world.tile_at(1, 5).darkness;
        assert!(d1 < d3 && d3 < d5, "{d1} {d3} {d5}");
    }

    #[test]
    fn rock_walls_keep_enclosed_tile_dark() {
        let mut world = world_from_rows(&["###", "#s#", "###"]);
        step_at(&mut world, 1, 1);
        assert!(world.tile_at(1, 1).darkness.is_infinite());
    }

    #[test]
    fn adjacent_cell_lights_fully() {
        let mut world = world_from_rows(&["###", "#sc", "###"]);
        step_at(&mut world, 1, 1);
        assert_eq!(world.tile_at(1, 1).darkness, 0.0);
    }

    #[test]
    fn darkness_is_recomputed_not_sticky() {
        let mut world = world_from_rows(&["#.#", "#s#", "###"]);
        step_at(&mut world, 1, 1);
        assert!(world.tile_at(1, 1).darkness.is_finite());
        world.set_tile_at(Position::new(1, 0), Tile::rock(Position::new(1, 0)));
        step_at(&mut world, 1, 1);
        assert!(world.tile_at(1, 1).darkness.is_infinite());
    }

    #[test]
    fn cells_reset_to_zero_and_air_is_untouched() {
        let mut world = world_from_rows(&["#c#", "#.#"]);
        if let Some(t) = world.tile_mut(Position::new(1, 0)) {
            t.darkness = 4.0;
        }
        step_at(&mut world, 1, 0);
        step_at(&mut world, 1, 1);
        assert_eq!(world.tile_at(1, 0).darkness, 0.0);
        assert_eq!(world.tile_at(1, 1).darkness, 0.0);
    }
}
