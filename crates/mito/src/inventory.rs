//! Bounded water/sugar store carried by soil, tissue and seeds.

use serde::{Deserialize, Serialize};

/// Slack for float rounding in the capacity check.
const EPSILON: f64 = 1e-9;

/// Two resources sharing one capacity: `water + sugar <= capacity`, both `>= 0`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Inventory {
    water: f64,
    sugar: f64,
    capacity: f64,
}

impl Inventory {
    #[must_use]
    pub fn new(capacity: f64) -> Self {
        Self {
            water: 0.0,
            sugar: 0.0,
            capacity: capacity.max(0.0),
        }
    }

    /// An inventory pre-filled through `change`, so oversized fills are clamped.
    #[must_use]
    pub fn with(capacity: f64, water: f64, sugar: f64) -> Self {
        let mut inv = Self::new(capacity);
        inv.change(water, sugar);
        inv
    }

    #[must_use]
    pub fn water(&self) -> f64 {
        self.water
    }

    #[must_use]
    pub fn sugar(&self) -> f64 {
        self.sugar
    }

    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Remaining room before the shared capacity is reached.
    #[must_use]
    pub fn space(&self) -> f64 {
        (self.capacity - self.water - self.sugar).max(0.0)
    }

    /// Adjust both amounts in place.
    ///
    /// Results below zero clamp to zero. Anything pushed past capacity is
    /// discarded, taken first from the sugar that was added and then from water.
    /// This destroys resource mass rather than rejecting the call.
    pub fn change(&mut self, water: f64, sugar: f64) {
        self.water = (self.water + water).max(0.0);
        self.sugar = (self.sugar + sugar).max(0.0);
        if self.water + self.sugar > self.capacity {
            if sugar > 0.0 {
                self.sugar = (self.capacity - self.water).max(0.0);
            }
            if self.water + self.sugar > self.capacity {
                self.water = (self.capacity - self.sugar).max(0.0);
            }
        }
        self.assert_bounds();
    }

    /// Move up to `water`/`sugar` into `other`, bounded by what `self` holds and
    /// by `other`'s space (water claims space first). Returns what actually moved.
    pub fn give(&mut self, other: &mut Inventory, water: f64, sugar: f64) -> (f64, f64) {
        let space = other.space();
        let water = water.max(0.0).min(self.water).min(space);
        let sugar = sugar.max(0.0).min(self.sugar).min(space - water);

        self.water -= water;
        self.sugar -= sugar;
        other.water += water;
        other.sugar += sugar;

        self.assert_bounds();
        other.assert_bounds();
        (water, sugar)
    }

    fn assert_bounds(&self) {
        assert!(
            self.water >= 0.0 && self.sugar >= 0.0,
            "inventory went negative: water {} sugar {}",
            self.water,
            self.sugar
        );
        assert!(
            self.water + self.sugar <= self.capacity + EPSILON,
            "inventory over capacity: water {} + sugar {} > {}",
            self.water,
            self.sugar,
            self.capacity
        );
    }
}
