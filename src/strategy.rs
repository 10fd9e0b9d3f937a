use crate::error::{DartsError, DartsResult};
use crate::geometry::Point;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Chooses where the next dart is aimed during a match.
///
/// Implementations must be deterministic for a given remaining score.
pub trait TargetSelector {
    fn select_target(&self, remaining_score: u32) -> DartsResult<Point>;
}

/// Placeholder for a strategy that has not been provided. Refuses to pick a
/// target instead of defaulting to the board centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl TargetSelector for Unavailable {
    fn select_target(&self, _remaining_score: u32) -> DartsResult<Point> {
        Err(DartsError::StrategyUnavailable(
            "no target selection strategy configured",
        ))
    }
}

/// Aims every dart at the same point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAim(pub Point);

impl TargetSelector for FixedAim {
    fn select_target(&self, _remaining_score: u32) -> DartsResult<Point> {
        Ok(self.0)
    }
}

/// Strategies selectable from the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Unavailable,
    /// Aim at the corrected target of the best-ranked calibrated field.
    BestField,
}
