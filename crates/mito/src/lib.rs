//! Tile-based plant ecosystem simulation engine.
//!
//! A grid of tiles trades water, sugar, light and energy every tick. Updates
//! happen in place on a single buffer, so the scan order in [`World::tick`] is
//! part of the determinism contract.

pub mod api;
pub mod config;
pub mod direction;
pub mod error;
pub mod inventory;
pub mod metabolism;
pub mod rules;
pub mod stats;
pub mod tile;
pub mod universe;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace_span;

pub use config::WorldConfig;
pub use direction::{Direction, Position};
pub use error::{Error, Result};
pub use inventory::Inventory;
pub use tile::{Cell, CellKind, Tile, TileKind, Variant};
pub use universe::Universe;

/// The 8 tiles around a position, indexed by [`Direction`].
#[derive(Clone, Copy, Debug)]
pub struct Neighbors([Tile; 8]);

impl Neighbors {
    #[must_use]
    pub fn get(&self, dir: Direction) -> &Tile {
        &self.0[dir.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Tile)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }
}

/// 2D arena of tiles. Out-of-bounds reads return Rock, writes are no-ops.
#[derive(Debug, Clone)]
pub struct World {
    pub width: usize,
    pub height: usize,
    pub(crate) tiles: Vec<Tile>,
    pub generation: u8,
    pub(crate) rng: ChaCha8Rng,
}

impl World {
    /// An all-Air world with seed 0.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = (0..width * height)
            .map(|i| Tile::air(Position::new((i % width) as i32, (i / width) as i32)))
            .collect();
        Self {
            width,
            height,
            tiles,
            generation: 0,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the dimensions are rejected.
    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        config.validate()?;
        let mut world = Self::new(config.width, config.height);
        world.rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(world)
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos.x, pos.y)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        self.tile(Position::new(x, y))
    }

    /// Copy of the tile at `pos`; off-grid positions resolve to Rock.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Tile {
        match self.index(pos) {
            Some(i) => self.tiles[i],
            None => Tile::rock(pos),
        }
    }

    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        let i = self.index(pos)?;
        Some(&mut self.tiles[i])
    }

    /// Overwrite the slot at `pos`. The tile's position and clock are restamped
    /// so it is not stepped again during the current tick.
    pub fn set_tile_at(&mut self, pos: Position, tile: Tile) {
        if let Some(i) = self.index(pos) {
            let mut stamped = tile;
            stamped.pos = pos;
            stamped.clock = self.generation;
            self.tiles[i] = stamped;
        }
    }

    #[must_use]
    pub fn tile_neighbors(&self, pos: Position) -> Neighbors {
        Neighbors(Direction::ALL.map(|dir| self.tile(pos.step(dir))))
    }

    /// Mutable access to two distinct in-bounds tiles at once.
    pub fn pair_mut(&mut self, a: Position, b: Position) -> Option<(&mut Tile, &mut Tile)> {
        let (i, j) = (self.index(a)?, self.index(b)?);
        if i == j {
            return None;
        }
        if i < j {
            let (lo, hi) = self.tiles.split_at_mut(j);
            Some((&mut lo[i], &mut hi[0]))
        } else {
            let (lo, hi) = self.tiles.split_at_mut(i);
            Some((&mut hi[0], &mut lo[j]))
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Set the cached sunlight of the Air tile at `pos`, clamped to `[0, 1]`.
    /// Returns false if `pos` does not hold Air.
    pub fn set_sunlight(&mut self, pos: Position, sunlight: f64) -> bool {
        match self.tile_mut(pos).map(|tile| &mut tile.kind) {
            Some(TileKind::Air(air)) => {
                air.sunlight = sunlight.clamp(0.0, 1.0);
                true
            }
            _ => false,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans bottom-to-top, left-to-right on even generations and right-to-left
    /// on odd ones. Skips Air and tiles already written this generation
    /// (clock == generation). Neighbors observe each other's updates immediately.
    pub fn tick(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        let gen = self.generation;
        let _span = trace_span!("tick", generation = gen).entered();
        let w = self.width as i32;
        let h = self.height as i32;

        for y in (0..h).rev() {
            let x_range: Box<dyn Iterator<Item = i32>> = if gen % 2 == 0 {
                Box::new(0..w)
            } else {
                Box::new((0..w).rev())
            };
            for x in x_range {
                let pos = Position::new(x, y);
                let Some(i) = self.index(pos) else { continue };
                let tile = &mut self.tiles[i];
                if matches!(tile.kind, TileKind::Air(_)) || tile.clock == gen {
                    continue;
                }
                tile.clock = gen;
                let mut api = api::TileApi::new(self, pos, gen);
                rules::step_tile(&mut api);
            }
        }
    }
}
