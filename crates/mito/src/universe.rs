//! WASM-facing wrapper exposing the world as flat per-tile buffers.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::config::WorldConfig;
use crate::direction::{Direction, Position};
use crate::tile::{CellKind, Tile, TileKind, Variant};
use crate::World;

/// Buffers are row-major, `y * width + x`.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    world: World,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// Rejects dimensions that `WorldConfig::validate` refuses.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Universe, JsError> {
        let config = WorldConfig {
            width,
            height,
            seed,
        };
        let world = World::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { world })
    }

    pub fn tick(&mut self) {
        self.world.tick();
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.world.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.world.height
    }

    #[must_use]
    pub fn generation(&self) -> u8 {
        self.world.generation
    }

    /// Seed the tile at `(x, y)` with a fresh tile of `variant`.
    /// Returns false for unknown variants or off-grid positions.
    pub fn place(&mut self, x: i32, y: i32, variant: u8) -> bool {
        let Some(variant) = Variant::from_u8(variant) else {
            return false;
        };
        if !self.world.in_bounds(x, y) {
            return false;
        }
        let pos = Position::new(x, y);
        self.world.set_tile_at(pos, Tile::from_variant(variant, pos));
        true
    }

    /// Grow a cell of `variant` from the cell at `(x, y)` in `direction`
    /// (index into N, S, E, W, NE, NW, SE, SW).
    pub fn grow(&mut self, x: i32, y: i32, direction: u8, variant: u8) -> bool {
        let Some(&dir) = Direction::ALL.get(direction as usize) else {
            return false;
        };
        let kind = match Variant::from_u8(variant) {
            Some(Variant::Cell) => CellKind::Plain,
            Some(Variant::Tissue) => CellKind::tissue(),
            Some(Variant::Leaf) => CellKind::leaf(),
            Some(Variant::Root) => CellKind::Root,
            Some(Variant::Seed) => CellKind::seed(),
            _ => return false,
        };
        match self.world.grow(Position::new(x, y), dir, kind) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "grow request refused");
                false
            }
        }
    }

    #[must_use]
    pub fn living_cells(&self) -> usize {
        self.world.census().living_cells()
    }

    #[must_use]
    pub fn variants(&self) -> Vec<u8> {
        self.world.tiles().iter().map(|t| t.variant() as u8).collect()
    }

    #[must_use]
    pub fn darkness(&self) -> Vec<f32> {
        self.world.tiles().iter().map(|t| t.darkness as f32).collect()
    }

    /// Cell energy, 0 for tiles without energy.
    #[must_use]
    pub fn energy(&self) -> Vec<f32> {
        self.map_tiles(|t| t.energy().unwrap_or(0.0))
    }

    #[must_use]
    pub fn water(&self) -> Vec<f32> {
        self.map_tiles(|t| t.inventory().map_or(0.0, |inv| inv.water()))
    }

    #[must_use]
    pub fn sugar(&self) -> Vec<f32> {
        self.map_tiles(|t| t.inventory().map_or(0.0, |inv| inv.sugar()))
    }

    /// 1 where a cell is eating, 0 elsewhere.
    #[must_use]
    pub fn eating(&self) -> Vec<u8> {
        self.world
            .tiles()
            .iter()
            .map(|t| match t.kind {
                TileKind::Cell(cell) => u8::from(cell.metabolism.is_eating()),
                _ => 0,
            })
            .collect()
    }
}

impl Universe {
    fn map_tiles(&self, f: impl Fn(&Tile) -> f64) -> Vec<f32> {
        self.world.tiles().iter().map(|t| f(t) as f32).collect()
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }
}
