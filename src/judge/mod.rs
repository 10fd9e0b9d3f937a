pub mod scripted;
pub mod simulated;
pub mod stream;

pub use self::scripted::ScriptedJudge;
pub use self::simulated::{SimulatedJudge, ThrowerProfile};
pub use self::stream::StreamJudge;

use crate::error::DartsResult;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// What the judge reports back for a single dart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    /// Where the dart actually landed.
    pub point: Point,
    /// 0 for a miss, otherwise 1, 2 or 3.
    pub multiplier: u8,
    /// Face value of the region hit, independent of the multiplier.
    pub score: u8,
}

impl ThrowOutcome {
    pub fn new(point: Point, multiplier: u8, score: u8) -> Self {
        Self {
            point,
            multiplier,
            score,
        }
    }

    pub fn miss(point: Point) -> Self {
        Self::new(point, 0, 0)
    }

    /// Points awarded for the dart.
    pub fn points(&self) -> u32 {
        if self.score > 0 {
            self.score as u32 * self.multiplier as u32
        } else {
            0
        }
    }
}

/// The external referee every dart is thrown against.
///
/// Each call is a blocking round trip; callers never issue a throw before the
/// previous outcome is known.
pub trait Judge {
    /// One-shot notice of how many practice darts will follow.
    fn publish_practicing_darts_count(&mut self, n: u32) -> DartsResult<()>;

    fn throw_dart(&mut self, target: Point) -> DartsResult<ThrowOutcome>;
}

impl<J: Judge + ?Sized> Judge for &mut J {
    fn publish_practicing_darts_count(&mut self, n: u32) -> DartsResult<()> {
        (**self).publish_practicing_darts_count(n)
    }

    fn throw_dart(&mut self, target: Point) -> DartsResult<ThrowOutcome> {
        (**self).throw_dart(target)
    }
}
