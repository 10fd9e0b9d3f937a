pub mod board;
pub mod play;
pub mod simulate;

use darts501::board::Board;
use darts501::calibration::CalibrationTable;
use darts501::strategy::{FixedAim, Strategy, TargetSelector, Unavailable};
use tracing::{info, warn};

/// Turns the configured strategy into a selector. `best-field` aims at the
/// corrected target of the field with the highest measured expected value.
pub fn build_selector(
    strategy: Strategy,
    board: &Board,
    table: &CalibrationTable,
) -> Box<dyn TargetSelector + Send + Sync> {
    match strategy {
        Strategy::Unavailable => Box::new(Unavailable),
        Strategy::BestField => match table.ranking(board).into_iter().next() {
            Some(best) if best.expected_value.is_some() => {
                info!(
                    "🎯 Aiming every dart at {} {} (EV {:.2})",
                    best.label,
                    best.aim(),
                    best.expected_value.unwrap_or_default()
                );
                Box::new(FixedAim(best.aim()))
            }
            _ => {
                warn!("⚠️  No field was calibrated; best-field strategy has nothing to aim at.");
                Box::new(Unavailable)
            }
        },
    }
}
