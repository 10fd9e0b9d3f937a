use super::MatchRules;
use crate::judge::ThrowOutcome;

/// What a single dart did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DartVerdict {
    /// Points were taken off and the turn goes on (or ended normally).
    Scored(u32),
    /// Invalid reduction; the score reverted and the rest of the turn is lost.
    Bust,
    /// The leg was checked out; scoring restarts from the starting score.
    LegWon,
}

/// Score and turn bookkeeping of a running match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    rules: MatchRules,
    score: i64,
    turn_darts_left: u32,
    darts_remaining: u32,
    darts_thrown: u32,
    legs_won: u32,
    busts: u32,
}

impl MatchState {
    pub fn new(rules: MatchRules, darts_budget: u32) -> Self {
        let start = rules.starting_score;
        Self::resume(rules, start, darts_budget)
    }

    /// State for a match picking up at an arbitrary remaining score. Legs
    /// won afterwards still restart from the rules' starting score.
    pub fn resume(rules: MatchRules, remaining: u32, darts_budget: u32) -> Self {
        Self {
            turn_darts_left: rules.darts_per_turn,
            score: remaining as i64,
            darts_remaining: darts_budget,
            darts_thrown: 0,
            legs_won: 0,
            busts: 0,
            rules,
        }
    }

    pub fn score(&self) -> u32 {
        self.score.max(0) as u32
    }

    pub fn turn_darts_left(&self) -> u32 {
        self.turn_darts_left
    }

    pub fn darts_remaining(&self) -> u32 {
        self.darts_remaining
    }

    pub fn darts_thrown(&self) -> u32 {
        self.darts_thrown
    }

    pub fn legs_won(&self) -> u32 {
        self.legs_won
    }

    pub fn busts(&self) -> u32 {
        self.busts
    }

    pub fn is_finished(&self) -> bool {
        self.darts_remaining == 0
    }

    fn is_bust(&self, multiplier: u8) -> bool {
        if self.score < 0 {
            return true;
        }
        self.rules.double_out() && ((self.score == 0 && multiplier != 2) || self.score == 1)
    }

    /// Applies one dart. The dart is charged against the budget before any
    /// rule is checked.
    pub fn record(&mut self, outcome: &ThrowOutcome) -> DartVerdict {
        self.darts_remaining = self.darts_remaining.saturating_sub(1);
        self.turn_darts_left = self.turn_darts_left.saturating_sub(1);
        self.darts_thrown += 1;

        let points = outcome.points();
        self.score -= points as i64;

        // Bust first: a zero score is only a win when the multiplier says so.
        let verdict = if self.is_bust(outcome.multiplier) {
            self.score += points as i64;
            self.darts_remaining = self.darts_remaining.saturating_sub(self.turn_darts_left);
            self.turn_darts_left = 0;
            self.busts += 1;
            DartVerdict::Bust
        } else if self.score == 0 {
            self.score = self.rules.starting_score as i64;
            self.turn_darts_left = 0;
            self.legs_won += 1;
            DartVerdict::LegWon
        } else {
            DartVerdict::Scored(points)
        };

        if self.turn_darts_left == 0 {
            self.turn_darts_left = self.rules.darts_per_turn;
        }
        verdict
    }
}
