use crate::error::{DartsError, DartsResult};
use clap::Args;
use serde::{Deserialize, Serialize};

/// Physical ring radii of the board, in millimetres from the centre.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardDimensions {
    #[arg(long, default_value_t = 6.35)]
    pub inner_bull_mm: f64,
    #[arg(long, default_value_t = 15.9)]
    pub outer_bull_mm: f64,
    #[arg(long, default_value_t = 99.0)]
    pub treble_inner_mm: f64,
    #[arg(long, default_value_t = 107.0)]
    pub treble_outer_mm: f64,
    #[arg(long, default_value_t = 162.0)]
    pub double_inner_mm: f64,
    #[arg(long, default_value_t = 170.0)]
    pub double_outer_mm: f64,

    // Everything downstream is expressed as a fraction of this.
    #[arg(long, default_value_t = 170.0)]
    pub board_radius_mm: f64,
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self {
            inner_bull_mm: 6.35,
            outer_bull_mm: 15.9,
            treble_inner_mm: 99.0,
            treble_outer_mm: 107.0,
            double_inner_mm: 162.0,
            double_outer_mm: 170.0,
            board_radius_mm: 170.0,
        }
    }
}

/// Ring boundaries as fractions of the board radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRadii {
    pub inner_bull: f64,
    pub outer_bull: f64,
    pub treble_inner: f64,
    pub treble_outer: f64,
    pub double_inner: f64,
    pub double_outer: f64,
}

impl BoardDimensions {
    fn boundaries(&self) -> [(&'static str, f64); 6] {
        [
            ("inner_bull_mm", self.inner_bull_mm),
            ("outer_bull_mm", self.outer_bull_mm),
            ("treble_inner_mm", self.treble_inner_mm),
            ("treble_outer_mm", self.treble_outer_mm),
            ("double_inner_mm", self.double_inner_mm),
            ("double_outer_mm", self.double_outer_mm),
        ]
    }

    pub fn validate(&self) -> DartsResult<()> {
        if !(self.board_radius_mm.is_finite() && self.board_radius_mm > 0.0) {
            return Err(DartsError::Config(format!(
                "board_radius_mm must be positive, got {}",
                self.board_radius_mm
            )));
        }

        let mut previous = ("centre", 0.0);
        for (name, value) in self.boundaries() {
            if !value.is_finite() || value <= previous.1 {
                return Err(DartsError::Config(format!(
                    "{} ({}) must be greater than {} ({})",
                    name, value, previous.0, previous.1
                )));
            }
            previous = (name, value);
        }

        if self.double_outer_mm > self.board_radius_mm {
            return Err(DartsError::Config(format!(
                "double_outer_mm ({}) exceeds board_radius_mm ({})",
                self.double_outer_mm, self.board_radius_mm
            )));
        }
        Ok(())
    }

    pub fn unit_radii(&self) -> DartsResult<UnitRadii> {
        self.validate()?;
        Ok(self.scaled())
    }

    fn scaled(&self) -> UnitRadii {
        let r = self.board_radius_mm;
        UnitRadii {
            inner_bull: self.inner_bull_mm / r,
            outer_bull: self.outer_bull_mm / r,
            treble_inner: self.treble_inner_mm / r,
            treble_outer: self.treble_outer_mm / r,
            double_inner: self.double_inner_mm / r,
            double_outer: self.double_outer_mm / r,
        }
    }
}

impl UnitRadii {
    /// Radii of the default 170 mm board.
    pub fn regulation() -> Self {
        BoardDimensions::default().scaled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_board_is_valid() {
        let radii = BoardDimensions::default().unit_radii().unwrap();
        assert!((radii.double_outer - 1.0).abs() < 1e-12);
        assert!(radii.treble_inner < radii.treble_outer);
        assert_eq!(radii, UnitRadii::regulation());
    }

    #[test]
    fn rejects_overlapping_rings() {
        let dims = BoardDimensions {
            treble_outer_mm: 95.0,
            ..Default::default()
        };
        let err = dims.validate().unwrap_err();
        assert!(err.to_string().contains("treble_outer_mm"));
    }

    #[test]
    fn rejects_rings_outside_board() {
        let dims = BoardDimensions {
            board_radius_mm: 160.0,
            ..Default::default()
        };
        assert!(dims.validate().is_err());
    }
}
