use crate::board::BoardDimensions;
use crate::calibration::PracticeSettings;
use crate::error::DartsResult;
use crate::game::{CompeteParams, MatchRules};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub board: BoardDimensions,
    #[command(flatten)]
    pub rules: MatchRules,
    #[command(flatten)]
    pub practice: PracticeSettings,
    #[command(flatten)]
    pub compete: CompeteParams,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DartsResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> DartsResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Copies every value the user typed on the command line over the values
    /// loaded from a file. Defaults supplied by clap never override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(board.inner_bull_mm);
        update_if_present!(board.outer_bull_mm);
        update_if_present!(board.treble_inner_mm);
        update_if_present!(board.treble_outer_mm);
        update_if_present!(board.double_inner_mm);
        update_if_present!(board.double_outer_mm);
        update_if_present!(board.board_radius_mm);

        update_if_present!(rules.starting_score);
        update_if_present!(rules.darts_per_turn);
        update_if_present!(rules.single_out);

        update_if_present!(practice.practice_darts);
        update_if_present!(practice.max_practice_darts);

        update_if_present!(compete.match_darts);
        update_if_present!(compete.strategy);
    }
}
