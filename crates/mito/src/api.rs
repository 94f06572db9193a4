//! Relative-position API for tile update rules.

use crate::direction::{Direction, Position};
use crate::tile::{Cell, Tile};
use crate::{Neighbors, World};

/// Handle on the tile currently being stepped. Off-grid reads return Rock,
/// writes are no-ops, and every write is stamped with the current generation.
#[derive(Debug)]
pub struct TileApi<'a> {
    pub world: &'a mut World,
    pub pos: Position,
    pub generation: u8,
}

impl<'a> TileApi<'a> {
    pub fn new(world: &'a mut World, pos: Position, generation: u8) -> Self {
        Self {
            world,
            pos,
            generation,
        }
    }

    #[must_use]
    pub fn me(&self) -> Tile {
        self.world.tile(self.pos)
    }

    pub fn me_mut(&mut self) -> Option<&mut Tile> {
        self.world.tile_mut(self.pos)
    }

    /// The stepped tile as a living cell, if it still is one.
    pub fn cell_mut(&mut self) -> Option<&mut Cell> {
        self.me_mut().and_then(Tile::as_cell_mut)
    }

    #[must_use]
    pub fn get(&self, dir: Direction) -> Tile {
        self.world.tile(self.pos.step(dir))
    }

    pub fn get_mut(&mut self, dir: Direction) -> Option<&mut Tile> {
        self.world.tile_mut(self.pos.step(dir))
    }

    #[must_use]
    pub fn neighbors(&self) -> Neighbors {
        self.world.tile_neighbors(self.pos)
    }

    pub fn set(&mut self, dir: Direction, tile: Tile) {
        self.world.set_tile_at(self.pos.step(dir), tile);
    }

    pub fn replace_me(&mut self, tile: Tile) {
        self.world.set_tile_at(self.pos, tile);
    }

    /// Move the stepped tile one step in `dir`, leaving `vacated` behind, and
    /// follow it. Whatever occupied the destination is overwritten.
    pub fn relocate(&mut self, dir: Direction, vacated: Tile) -> bool {
        let to = self.pos.step(dir);
        if !self.world.in_bounds(to.x, to.y) {
            return false;
        }
        let me = self.me();
        self.world.set_tile_at(self.pos, vacated);
        self.world.set_tile_at(to, me);
        self.pos = to;
        true
    }
}
