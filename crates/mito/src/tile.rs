//! Tile variants occupying grid positions.

use std::fmt;

use crate::direction::Position;
use crate::inventory::Inventory;
use crate::metabolism::Metabolism;

pub const CELL_ENERGY_MAX: f64 = 2000.0;
/// Energy gained from one unit of sugar.
pub const ENERGY_TO_SUGAR_RATIO: f64 = 2000.0;
/// Sugar needed to build one cell at full energy.
pub const CELL_SUGAR_BUILD_COST: f64 = CELL_ENERGY_MAX / ENERGY_TO_SUGAR_RATIO;

pub const SOIL_MAX_WATER: f64 = 20.0;
pub const TISSUE_MAX_INVENTORY: f64 = 10.0;
pub const SEED_MAX_INVENTORY: f64 = 1000.0;

/// Linear map of `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`.
/// Inputs outside the domain extrapolate; nothing is clamped.
#[must_use]
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

/// Flat tag for every concrete tile type. Discriminants are the values exported
/// to presentation buffers, do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    Air = 0,
    Rock = 1,
    Soil = 2,
    Fountain = 3,
    DeadCell = 4,
    Cell = 5,
    Tissue = 6,
    Leaf = 7,
    Root = 8,
    Seed = 9,
}

impl Variant {
    pub const ALL: [Variant; 10] = [
        Variant::Air,
        Variant::Rock,
        Variant::Soil,
        Variant::Fountain,
        Variant::DeadCell,
        Variant::Cell,
        Variant::Tissue,
        Variant::Leaf,
        Variant::Root,
        Variant::Seed,
    ];

    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Any member of the living cell family.
    #[must_use]
    pub fn is_cell(self) -> bool {
        matches!(
            self,
            Self::Cell | Self::Tissue | Self::Leaf | Self::Root | Self::Seed
        )
    }

    /// Soil or a soil specialization.
    #[must_use]
    pub fn is_soil(self) -> bool {
        matches!(self, Self::Soil | Self::Fountain)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Air => "Air",
            Self::Rock => "Rock",
            Self::Soil => "Soil",
            Self::Fountain => "Fountain",
            Self::DeadCell => "DeadCell",
            Self::Cell => "Cell",
            Self::Tissue => "Tissue",
            Self::Leaf => "Leaf",
            Self::Root => "Root",
            Self::Seed => "Seed",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Air {
    /// Cached by whoever computes lighting; the core only reads it.
    pub sunlight: f64,
}

impl Default for Air {
    fn default() -> Self {
        Self { sunlight: 1.0 }
    }
}

impl Air {
    #[must_use]
    pub fn sunlight(&self) -> f64 {
        self.sunlight
    }

    /// CO2 availability at row `y`: 1 at the top, 0.5 at mid-height.
    #[must_use]
    pub fn co2(y: i32, height: i32) -> f64 {
        map_range(f64::from(y), f64::from(height) / 2.0, 0.0, 0.5, 1.0)
    }
}

/// Last photosynthesis reading of a leaf, averaged over its air/tissue pairs.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LeafReading {
    pub efficiency: f64,
    pub speed: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CellKind {
    Plain,
    Tissue(Inventory),
    Leaf(LeafReading),
    Root,
    Seed(Inventory),
}

impl CellKind {
    #[must_use]
    pub fn tissue() -> Self {
        Self::Tissue(Inventory::new(TISSUE_MAX_INVENTORY))
    }

    #[must_use]
    pub fn leaf() -> Self {
        Self::Leaf(LeafReading::default())
    }

    #[must_use]
    pub fn seed() -> Self {
        Self::Seed(Inventory::new(SEED_MAX_INVENTORY))
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::Plain => Variant::Cell,
            Self::Tissue(_) => Variant::Tissue,
            Self::Leaf(_) => Variant::Leaf,
            Self::Root => Variant::Root,
            Self::Seed(_) => Variant::Seed,
        }
    }
}

/// A living cell: energy, metabolism and droop shared by all specializations.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub kind: CellKind,
    pub energy: f64,
    pub metabolism: Metabolism,
    /// Vertical sag; above 0.5 the cell drops a row.
    pub droop_y: f64,
}

impl Cell {
    #[must_use]
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            energy: CELL_ENERGY_MAX,
            metabolism: Metabolism::default(),
            droop_y: 0.0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TileKind {
    Air(Air),
    Rock,
    Soil(Inventory),
    /// Soil that refills itself every step.
    Fountain(Inventory),
    DeadCell,
    Cell(Cell),
}

/// One grid occupant. `clock` holds the generation of the last write so the
/// tick loop never steps a tile twice.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tile {
    pub pos: Position,
    pub darkness: f64,
    pub clock: u8,
    pub kind: TileKind,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.variant(), self.pos)
    }
}

impl Tile {
    fn with_kind(pos: Position, kind: TileKind) -> Self {
        let darkness = match kind {
            TileKind::Air(_) | TileKind::Cell(_) => 0.0,
            _ => f64::INFINITY,
        };
        Self {
            pos,
            darkness,
            clock: 0,
            kind,
        }
    }

    #[must_use]
    pub fn air(pos: Position) -> Self {
        Self::with_kind(pos, TileKind::Air(Air::default()))
    }

    #[must_use]
    pub fn rock(pos: Position) -> Self {
        Self::with_kind(pos, TileKind::Rock)
    }

    #[must_use]
    pub fn soil(pos: Position, water: f64) -> Self {
        Self::with_kind(
            pos,
            TileKind::Soil(Inventory::with(SOIL_MAX_WATER, water, 0.0)),
        )
    }

    #[must_use]
    pub fn fountain(pos: Position, water: f64) -> Self {
        Self::with_kind(
            pos,
            TileKind::Fountain(Inventory::with(SOIL_MAX_WATER, water, 0.0)),
        )
    }

    #[must_use]
    pub fn dead_cell(pos: Position) -> Self {
        Self::with_kind(pos, TileKind::DeadCell)
    }

    #[must_use]
    pub fn cell(pos: Position, kind: CellKind) -> Self {
        Self::with_kind(pos, TileKind::Cell(Cell::new(kind)))
    }

    /// A fresh tile of `variant` with default contents.
    #[must_use]
    pub fn from_variant(variant: Variant, pos: Position) -> Self {
        match variant {
            Variant::Air => Self::air(pos),
            Variant::Rock => Self::rock(pos),
            Variant::Soil => Self::soil(pos, 0.0),
            Variant::Fountain => Self::fountain(pos, 0.0),
            Variant::DeadCell => Self::dead_cell(pos),
            Variant::Cell => Self::cell(pos, CellKind::Plain),
            Variant::Tissue => Self::cell(pos, CellKind::tissue()),
            Variant::Leaf => Self::cell(pos, CellKind::leaf()),
            Variant::Root => Self::cell(pos, CellKind::Root),
            Variant::Seed => Self::cell(pos, CellKind::seed()),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        match &self.kind {
            TileKind::Air(_) => Variant::Air,
            TileKind::Rock => Variant::Rock,
            TileKind::Soil(_) => Variant::Soil,
            TileKind::Fountain(_) => Variant::Fountain,
            TileKind::DeadCell => Variant::DeadCell,
            TileKind::Cell(cell) => cell.kind.variant(),
        }
    }

    #[must_use]
    pub fn is_cell(&self) -> bool {
        matches!(self.kind, TileKind::Cell(_))
    }

    #[must_use]
    pub fn as_air(&self) -> Option<&Air> {
        match &self.kind {
            TileKind::Air(air) => Some(air),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_cell(&self) -> Option<&Cell> {
        match &self.kind {
            TileKind::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_cell_mut(&mut self) -> Option<&mut Cell> {
        match &mut self.kind {
            TileKind::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    /// Energy, for tiles that carry it.
    #[must_use]
    pub fn energy(&self) -> Option<f64> {
        self.as_cell().map(|cell| cell.energy)
    }

    #[must_use]
    pub fn inventory(&self) -> Option<&Inventory> {
        match &self.kind {
            TileKind::Soil(inv)
            | TileKind::Fountain(inv)
            | TileKind::Cell(Cell {
                kind: CellKind::Tissue(inv) | CellKind::Seed(inv),
                ..
            }) => Some(inv),
            _ => None,
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match &mut self.kind {
            TileKind::Soil(inv)
            | TileKind::Fountain(inv)
            | TileKind::Cell(Cell {
                kind: CellKind::Tissue(inv) | CellKind::Seed(inv),
                ..
            }) => Some(inv),
            _ => None,
        }
    }
}
