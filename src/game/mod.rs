pub mod state;

pub use self::state::{DartVerdict, MatchState};

use crate::consts::{DARTS501_INITIAL_SCORE, DARTS_PER_TURN, DEFAULT_MATCH_DARTS};
use crate::error::DartsResult;
use crate::judge::Judge;
use crate::strategy::{Strategy, TargetSelector};
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    #[arg(long, default_value_t = DARTS501_INITIAL_SCORE)]
    pub starting_score: u32,
    #[arg(long, default_value_t = DARTS_PER_TURN)]
    pub darts_per_turn: u32,
    /// Allow checking out on any field instead of requiring a double.
    #[arg(long, default_value_t = false)]
    pub single_out: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            starting_score: DARTS501_INITIAL_SCORE,
            darts_per_turn: DARTS_PER_TURN,
            single_out: false,
        }
    }
}

impl MatchRules {
    pub fn double_out(&self) -> bool {
        !self.single_out
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompeteParams {
    #[arg(long, default_value_t = DEFAULT_MATCH_DARTS)]
    pub match_darts: u32,
    #[arg(long, value_enum, default_value_t = Strategy::Unavailable)]
    pub strategy: Strategy,
}

impl Default for CompeteParams {
    fn default() -> Self {
        Self {
            match_darts: DEFAULT_MATCH_DARTS,
            strategy: Strategy::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub final_score: u32,
    pub darts_thrown: u32,
    pub legs_won: u32,
    pub busts: u32,
}

impl From<&MatchState> for MatchReport {
    fn from(state: &MatchState) -> Self {
        Self {
            final_score: state.score(),
            darts_thrown: state.darts_thrown(),
            legs_won: state.legs_won(),
            busts: state.busts(),
        }
    }
}

/// Plays darts against a judge until the dart budget is spent.
pub struct MatchEngine {
    rules: MatchRules,
}

impl MatchEngine {
    pub fn new(rules: MatchRules) -> Self {
        Self { rules }
    }

    pub fn play<J, S>(&self, judge: &mut J, selector: &S, darts: u32) -> DartsResult<MatchReport>
    where
        J: Judge + ?Sized,
        S: TargetSelector + ?Sized,
    {
        self.play_from(judge, selector, darts, self.rules.starting_score)
    }

    /// Plays starting at `remaining` points instead of the starting score.
    pub fn play_from<J, S>(
        &self,
        judge: &mut J,
        selector: &S,
        darts: u32,
        remaining: u32,
    ) -> DartsResult<MatchReport>
    where
        J: Judge + ?Sized,
        S: TargetSelector + ?Sized,
    {
        let mut state = MatchState::resume(self.rules.clone(), remaining, darts);

        while !state.is_finished() {
            let target = selector.select_target(state.score())?;
            let outcome = judge.throw_dart(target)?;
            let verdict = state.record(&outcome);
            debug!(
                "Dart {}: {} x{} -> {:?}, remaining {}",
                state.darts_thrown(),
                outcome.score,
                outcome.multiplier,
                verdict,
                state.score()
            );
            if verdict == DartVerdict::LegWon {
                info!("🏁 Leg {} won after {} darts", state.legs_won(), state.darts_thrown());
            }
        }

        let report = MatchReport::from(&state);
        info!(
            "Match over: score {} after {} darts ({} legs, {} busts)",
            report.final_score, report.darts_thrown, report.legs_won, report.busts
        );
        Ok(report)
    }
}
