//! Eating / not-eating cycle that gates sugar-to-energy conversion.

use std::fmt;

use crate::tile::CELL_ENERGY_MAX;

/// Ticks a state must last before the energy thresholds can flip it.
pub const METABOLISM_MIN_DURATION: u32 = 25;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MetabolismState {
    #[default]
    NotEating,
    Eating,
}

impl fmt::Display for MetabolismState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEating => write!(f, "not-eating"),
            Self::Eating => write!(f, "eating"),
        }
    }
}

/// Current state plus ticks spent in it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Metabolism {
    pub state: MetabolismState,
    pub duration: u32,
}

impl Metabolism {
    #[must_use]
    pub fn is_eating(&self) -> bool {
        self.state == MetabolismState::Eating
    }

    /// One tick: check the transition against `energy`, then count the tick.
    ///
    /// Entry and exit thresholds differ so a cell does not flap between states.
    pub fn advance(&mut self, energy: f64) {
        let settled = self.duration > METABOLISM_MIN_DURATION;
        let next = match self.state {
            MetabolismState::NotEating if energy < CELL_ENERGY_MAX / 2.0 && settled => {
                Some(MetabolismState::Eating)
            }
            MetabolismState::Eating
                if (energy > 0.8 * CELL_ENERGY_MAX && settled) || energy == CELL_ENERGY_MAX =>
            {
                Some(MetabolismState::NotEating)
            }
            _ => None,
        };
        if let Some(state) = next {
            self.state = state;
            self.duration = 0;
        }
        self.duration += 1;
    }
}
