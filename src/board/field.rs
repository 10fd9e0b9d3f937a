use crate::consts::{SECTOR_ORDER, SECTOR_WIDTH};
use crate::geometry::{Point, PolarPoint};
use crate::judge::ThrowOutcome;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Sector slot owning a normalized angle, counted clockwise from the 20.
/// Slot `i` covers `[(i - 0.5)·w, (i + 0.5)·w)`, so neighbouring wedges share
/// their boundary exactly.
pub fn sector_slot(angle: f64) -> usize {
    ((angle / SECTOR_WIDTH + 0.5).floor() as usize) % SECTOR_ORDER.len()
}

/// Radial band a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Ring {
    InnerBull,
    OuterBull,
    SingleInner,
    Treble,
    SingleOuter,
    Double,
}

impl Ring {
    pub fn multiplier(self) -> u8 {
        match self {
            Ring::InnerBull | Ring::Double => 2,
            Ring::Treble => 3,
            Ring::OuterBull | Ring::SingleInner | Ring::SingleOuter => 1,
        }
    }

    pub fn is_bull(self) -> bool {
        matches!(self, Ring::InnerBull | Ring::OuterBull)
    }
}

/// One scoring region of the board. Immutable once the board is built;
/// calibration statistics live in a separate `FieldStats` cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardField {
    pub min_angle: f64,
    pub max_angle: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub ring: Ring,
    pub score: u8,
}

impl BoardField {
    pub fn bull(ring: Ring, score: u8, min_radius: f64, max_radius: f64) -> Self {
        Self {
            min_angle: 0.0,
            max_angle: TAU,
            min_radius,
            max_radius,
            ring,
            score,
        }
    }

    pub fn wedge(
        ring: Ring,
        score: u8,
        (min_angle, max_angle): (f64, f64),
        (min_radius, max_radius): (f64, f64),
    ) -> Self {
        Self {
            min_angle,
            max_angle,
            min_radius,
            max_radius,
            ring,
            score,
        }
    }

    pub fn multiplier(&self) -> u8 {
        self.ring.multiplier()
    }

    pub fn is_bull(&self) -> bool {
        self.ring.is_bull()
    }

    /// Points the field is worth when hit.
    pub fn value(&self) -> u32 {
        self.score as u32 * self.multiplier() as u32
    }

    /// Aim point in polar form. Bulls aim at the origin; every other field
    /// aims at the midpoint of its angular and radial span.
    pub fn center_as_polar(&self) -> PolarPoint {
        if self.is_bull() {
            return PolarPoint::new(0.0, 0.0);
        }
        PolarPoint::new(
            (self.min_angle + self.max_angle) / 2.0,
            (self.min_radius + self.max_radius) / 2.0,
        )
    }

    pub fn cartesian_center(&self) -> Point {
        self.center_as_polar().to_cartesian()
    }

    /// Radial bounds are half-open. Wedges are matched by sector slot rather
    /// than by subtracting bounds, which rounds differently on either side of
    /// a shared edge.
    pub fn contains(&self, p: &PolarPoint) -> bool {
        if !(self.min_radius <= p.radius() && p.radius() < self.max_radius) {
            return false;
        }
        if self.is_bull() {
            return true;
        }
        sector_slot(p.angle()) == sector_slot(self.center_as_polar().angle())
    }

    /// A throw counts as a hit only when both the face value and the
    /// multiplier match the field.
    pub fn is_hit(&self, outcome: &ThrowOutcome) -> bool {
        outcome.score == self.score && outcome.multiplier == self.multiplier()
    }

    /// Short board notation: `T20`, `D16`, `S5`, `S5o`, `SB`, `DB`.
    pub fn label(&self) -> String {
        match self.ring {
            Ring::InnerBull => "DB".to_string(),
            Ring::OuterBull => "SB".to_string(),
            Ring::SingleInner => format!("S{}", self.score),
            Ring::Treble => format!("T{}", self.score),
            Ring::SingleOuter => format!("S{}o", self.score),
            Ring::Double => format!("D{}", self.score),
        }
    }
}

impl fmt::Display for BoardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} x{})", self.label(), self.score, self.multiplier())
    }
}
