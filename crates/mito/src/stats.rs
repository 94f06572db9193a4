//! Whole-world totals used for conservation checks and presentation.

use crate::tile::Variant;
use crate::World;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Census {
    /// Tile counts indexed by `Variant as usize`
    pub counts: [usize; Variant::ALL.len()],
    pub water: f64,
    pub sugar: f64,
    /// Summed energy of all living cells
    pub energy: f64,
}

impl Census {
    #[must_use]
    pub fn count(&self, variant: Variant) -> usize {
        self.counts[variant as usize]
    }

    #[must_use]
    pub fn living_cells(&self) -> usize {
        Variant::ALL
            .iter()
            .filter(|v| v.is_cell())
            .map(|&v| self.count(v))
            .sum()
    }
}

impl World {
    #[must_use]
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for tile in &self.tiles {
            census.counts[tile.variant() as usize] += 1;
            if let Some(inv) = tile.inventory() {
                census.water += inv.water();
                census.sugar += inv.sugar();
            }
            if let Some(energy) = tile.energy() {
                census.energy += energy;
            }
        }
        census
    }
}
