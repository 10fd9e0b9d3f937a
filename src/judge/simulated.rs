use super::{Judge, ThrowOutcome};
use crate::board::Board;
use crate::error::DartsResult;
use crate::geometry::Point;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// How a simulated player misses: a constant offset plus Gaussian scatter,
/// both in board radii.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowerProfile {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub bias_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub bias_y: f64,
    /// Standard deviation of the scatter on each axis.
    #[arg(long, default_value_t = 0.05)]
    pub spread: f64,
}

impl Default for ThrowerProfile {
    fn default() -> Self {
        Self {
            bias_x: 0.0,
            bias_y: 0.0,
            spread: 0.05,
        }
    }
}

impl ThrowerProfile {
    pub fn bias(&self) -> Point {
        Point::new(self.bias_x, self.bias_y)
    }
}

/// In-process judge that scores darts against a `Board` using a seeded
/// random throw model.
pub struct SimulatedJudge {
    board: Board,
    profile: ThrowerProfile,
    rng: fastrand::Rng,
    announced: Vec<u32>,
    throws: u64,
}

impl SimulatedJudge {
    pub fn new(board: Board, profile: ThrowerProfile, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        Self {
            board,
            profile,
            rng,
            announced: Vec::new(),
            throws: 0,
        }
    }

    pub fn announcements(&self) -> &[u32] {
        &self.announced
    }

    pub fn throws(&self) -> u64 {
        self.throws
    }

    // Box-Muller; `1 - f64()` keeps the log argument in (0, 1].
    fn gaussian(&mut self) -> f64 {
        let u1 = 1.0 - self.rng.f64();
        let u2 = self.rng.f64();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}

impl Judge for SimulatedJudge {
    fn publish_practicing_darts_count(&mut self, n: u32) -> DartsResult<()> {
        debug!("Simulated judge: {} practice darts announced", n);
        self.announced.push(n);
        Ok(())
    }

    fn throw_dart(&mut self, target: Point) -> DartsResult<ThrowOutcome> {
        self.throws += 1;
        let scatter = Point::new(self.gaussian(), self.gaussian()).scale(self.profile.spread);
        let landed = target + self.profile.bias() + scatter;
        let (score, multiplier) = self.board.score_point(landed);
        Ok(ThrowOutcome::new(landed, multiplier, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Ring;

    #[test]
    fn same_seed_same_darts() {
        let profile = ThrowerProfile::default();
        let mut a = SimulatedJudge::new(Board::regulation(), profile.clone(), Some(7));
        let mut b = SimulatedJudge::new(Board::regulation(), profile, Some(7));
        for _ in 0..20 {
            let target = Point::new(0.0, -0.6);
            assert_eq!(a.throw_dart(target).unwrap(), b.throw_dart(target).unwrap());
        }
        assert_eq!(a.throws(), 20);
    }

    #[test]
    fn perfect_thrower_hits_what_it_aims_at() {
        let profile = ThrowerProfile {
            spread: 0.0,
            ..Default::default()
        };
        let board = Board::regulation();
        let mut judge = SimulatedJudge::new(board.clone(), profile, Some(1));
        // The outer bull shares its aim point (the origin) with the inner bull.
        for field in board.fields().iter().filter(|f| f.ring != Ring::OuterBull) {
            let outcome = judge.throw_dart(field.cartesian_center()).unwrap();
            assert!(field.is_hit(&outcome), "missed {}", field);
        }
    }

    #[test]
    fn bias_shifts_every_dart() {
        let profile = ThrowerProfile {
            bias_x: 0.5,
            bias_y: 0.0,
            spread: 0.0,
        };
        let mut judge = SimulatedJudge::new(Board::regulation(), profile, None);
        let outcome = judge.throw_dart(Point::ORIGIN).unwrap();
        assert_eq!(outcome.point, Point::new(0.5, 0.0));
    }
}
