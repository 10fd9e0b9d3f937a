use crate::board::{Board, BoardField, FieldId};
use crate::error::DartsResult;
use crate::geometry::Point;
use serde::Serialize;
use std::cmp::Ordering;
use std::io::Write;

/// Mutable calibration statistics for one board field.
///
/// Accumulate-only: samples and attempts are added, never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldStats {
    deltas: Vec<Point>,
    avg_targeting_delta: Point,
    attempts: u32,
    hits: u32,
}

impl FieldStats {
    /// Records one `intended - actual` vector and updates the cumulative mean.
    pub fn record_delta(&mut self, delta: Point) {
        self.deltas.push(delta);
        let n = self.deltas.len() as f64;
        self.avg_targeting_delta += (delta - self.avg_targeting_delta).scale(1.0 / n);
    }

    pub fn record_attempt(&mut self, hit: bool) {
        self.attempts += 1;
        if hit {
            self.hits += 1;
        }
    }

    pub fn deltas(&self) -> &[Point] {
        &self.deltas
    }

    pub fn avg_targeting_delta(&self) -> Point {
        self.avg_targeting_delta
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// `None` until at least one attempt was made.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.hits as f64 / self.attempts as f64)
        }
    }

    pub fn expected_value(&self, field: &BoardField) -> Option<f64> {
        self.accuracy().map(|a| a * field.value() as f64)
    }

    /// Nominal centre shifted by the mean targeting error.
    pub fn corrected_target(&self, field: &BoardField) -> Point {
        field.cartesian_center() + self.avg_targeting_delta
    }
}

/// One row of the post-calibration report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRanking {
    #[serde(skip)]
    pub id: FieldId,
    pub label: String,
    pub score: u8,
    pub multiplier: u8,
    pub samples: usize,
    pub accuracy: Option<f64>,
    pub expected_value: Option<f64>,
    pub aim_x: f64,
    pub aim_y: f64,
}

impl FieldRanking {
    pub fn aim(&self) -> Point {
        Point::new(self.aim_x, self.aim_y)
    }
}

/// Statistics for every field of a board, indexed by `FieldId`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    stats: Vec<FieldStats>,
}

impl CalibrationTable {
    pub fn new(board: &Board) -> Self {
        Self {
            stats: vec![FieldStats::default(); board.len()],
        }
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldStats> {
        self.stats.get(id.0)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut FieldStats> {
        self.stats.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Aim point for a field: its centre plus whatever correction has been
    /// measured so far.
    pub fn corrected_target(&self, board: &Board, id: FieldId) -> Option<Point> {
        let field = board.get(id)?;
        Some(match self.get(id) {
            Some(stats) => stats.corrected_target(field),
            None => field.cartesian_center(),
        })
    }

    /// Fields by descending expected value. Stable, with unmeasured fields last.
    pub fn ranking(&self, board: &Board) -> Vec<FieldRanking> {
        let mut rows: Vec<FieldRanking> = board
            .iter()
            .zip(&self.stats)
            .map(|((id, field), stats)| {
                let aim = stats.corrected_target(field);
                FieldRanking {
                    id,
                    label: field.label(),
                    score: field.score,
                    multiplier: field.multiplier(),
                    samples: stats.deltas().len(),
                    accuracy: stats.accuracy(),
                    expected_value: stats.expected_value(field),
                    aim_x: aim.x,
                    aim_y: aim.y,
                }
            })
            .collect();

        rows.sort_by(|a, b| match (a.expected_value, b.expected_value) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        rows
    }

    pub fn write_csv<W: Write>(&self, board: &Board, writer: W) -> DartsResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in self.ranking(board) {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
