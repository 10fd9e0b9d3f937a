use super::{Judge, ThrowOutcome};
use crate::error::DartsResult;
use crate::geometry::Point;

/// Judge that replays a fixed list of outcomes and records every call made
/// against it. Once the script runs out the last outcome repeats; an empty
/// script answers every dart with a miss at the origin.
#[derive(Debug, Clone, Default)]
pub struct ScriptedJudge {
    script: Vec<ThrowOutcome>,
    cursor: usize,
    pub announcements: Vec<u32>,
    pub targets: Vec<Point>,
}

impl ScriptedJudge {
    pub fn new(script: Vec<ThrowOutcome>) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Script built from `(score, multiplier)` pairs, all landing at `point`.
    pub fn from_scores(point: Point, darts: &[(u8, u8)]) -> Self {
        Self::new(
            darts
                .iter()
                .map(|&(score, multiplier)| ThrowOutcome::new(point, multiplier, score))
                .collect(),
        )
    }

    pub fn throws(&self) -> usize {
        self.targets.len()
    }
}

impl Judge for ScriptedJudge {
    fn publish_practicing_darts_count(&mut self, n: u32) -> DartsResult<()> {
        self.announcements.push(n);
        Ok(())
    }

    fn throw_dart(&mut self, target: Point) -> DartsResult<ThrowOutcome> {
        self.targets.push(target);
        let outcome = match self.script.get(self.cursor).or(self.script.last()) {
            Some(o) => *o,
            None => ThrowOutcome::miss(Point::ORIGIN),
        };
        self.cursor += 1;
        Ok(outcome)
    }
}
