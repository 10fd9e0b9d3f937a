pub mod stats;

pub use self::stats::{CalibrationTable, FieldRanking, FieldStats};

use crate::board::Board;
use crate::consts::MAX_PRACTICE_DARTS;
use crate::error::{DartsError, DartsResult};
use crate::judge::Judge;
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSettings {
    /// Darts requested for the practice session (rounded down to whole batches).
    #[arg(long, default_value_t = 16_400)]
    pub practice_darts: u32,
    #[arg(long, default_value_t = MAX_PRACTICE_DARTS)]
    pub max_practice_darts: u32,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            practice_darts: 16_400,
            max_practice_darts: MAX_PRACTICE_DARTS,
        }
    }
}

/// How a practice request is split across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticePlan {
    pub requested: u32,
    /// Darts per batch; every field gets one measurement and one accuracy batch.
    pub per_batch: u32,
    pub usable: u32,
}

impl PracticePlan {
    pub fn new(requested: u32, field_count: usize) -> Self {
        let batches = 2 * field_count as u32;
        let per_batch = if batches == 0 { 0 } else { requested / batches };
        Self {
            requested,
            per_batch,
            usable: per_batch * batches,
        }
    }

    pub fn dropped(&self) -> u32 {
        self.requested - self.usable
    }
}

/// Measures each field's systematic aiming error and the accuracy achieved
/// once that error is compensated.
pub struct CalibrationEngine {
    settings: PracticeSettings,
}

impl CalibrationEngine {
    pub fn new(settings: PracticeSettings) -> Self {
        Self { settings }
    }

    pub fn plan(&self, board: &Board, requested: u32) -> DartsResult<PracticePlan> {
        if requested > self.settings.max_practice_darts {
            return Err(DartsError::ExcessivePractice {
                requested,
                limit: self.settings.max_practice_darts,
            });
        }
        Ok(PracticePlan::new(requested, board.len()))
    }

    /// Runs the configured practice session.
    pub fn run<J: Judge + ?Sized>(&self, board: &Board, judge: &mut J) -> DartsResult<CalibrationTable> {
        self.practice(board, judge, self.settings.practice_darts)
    }

    pub fn practice<J: Judge + ?Sized>(
        &self,
        board: &Board,
        judge: &mut J,
        requested: u32,
    ) -> DartsResult<CalibrationTable> {
        let plan = self.plan(board, requested)?;
        info!(
            "🎯 Practicing {} darts ({} per batch, {} dropped)",
            plan.usable,
            plan.per_batch,
            plan.dropped()
        );

        judge.publish_practicing_darts_count(plan.usable)?;

        let mut table = CalibrationTable::new(board);
        for (id, field) in board.iter() {
            let Some(stats) = table.get_mut(id) else {
                continue;
            };

            let center = field.cartesian_center();
            for _ in 0..plan.per_batch {
                let outcome = judge.throw_dart(center)?;
                stats.record_delta(center - outcome.point);
            }

            let target = stats.corrected_target(field);
            for _ in 0..plan.per_batch {
                let outcome = judge.throw_dart(target)?;
                stats.record_attempt(field.is_hit(&outcome));
            }

            debug!(
                "{}: delta {} accuracy {:?}",
                field,
                stats.avg_targeting_delta(),
                stats.accuracy()
            );
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::judge::ScriptedJudge;

    #[test]
    fn plan_rounds_down_to_whole_batches() {
        let plan = PracticePlan::new(1000, 82);
        assert_eq!(plan.per_batch, 6);
        assert_eq!(plan.usable, 984);
        assert_eq!(plan.dropped(), 16);

        let tiny = PracticePlan::new(100, 82);
        assert_eq!(tiny.per_batch, 0);
        assert_eq!(tiny.usable, 0);
    }

    #[test]
    fn excessive_request_throws_nothing() {
        let engine = CalibrationEngine::new(PracticeSettings::default());
        let mut judge = ScriptedJudge::default();
        let result = engine.practice(&Board::regulation(), &mut judge, 100_001);

        assert!(matches!(
            result,
            Err(DartsError::ExcessivePractice {
                requested: 100_001,
                limit: 100_000
            })
        ));
        assert!(judge.announcements.is_empty());
        assert_eq!(judge.throws(), 0);
    }

    #[test]
    fn ceiling_itself_is_allowed() {
        let engine = CalibrationEngine::new(PracticeSettings {
            practice_darts: 0,
            max_practice_darts: 164,
        });
        let mut judge = ScriptedJudge::default();
        engine
            .practice(&Board::regulation(), &mut judge, 164)
            .unwrap();
        assert_eq!(judge.throws(), 164);
    }

    #[test]
    fn correction_is_applied_to_accuracy_batch() {
        let board = Board::regulation();
        let engine = CalibrationEngine::new(PracticeSettings::default());
        // Every dart lands at the same spot, so each field learns
        // `center - spot` as its correction.
        let spot = Point::new(0.25, 0.25);
        let mut judge = ScriptedJudge::from_scores(spot, &[(0, 0)]);

        let table = engine.practice(&board, &mut judge, 164).unwrap();

        // Field 0: measurement dart, then accuracy dart.
        let center = board.fields()[0].cartesian_center();
        let expected = center + (center - spot);
        assert_eq!(judge.targets[0], center);
        assert!(judge.targets[1].distance(expected) < 1e-12);
        assert_eq!(table.get(crate::board::FieldId(0)).unwrap().accuracy(), Some(0.0));
    }
}
