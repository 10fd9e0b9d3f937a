use super::build_selector;
use clap::Args;
use darts501::board::Board;
use darts501::calibration::CalibrationEngine;
use darts501::config::Config;
use darts501::game::MatchEngine;
use darts501::judge::StreamJudge;
use darts501::DartsResult;
use std::io;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: PlayArgs, config: Config) -> DartsResult<()> {
    let board = Board::build(&config.board)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut judge = StreamJudge::new(stdin.lock(), stdout.lock());

    let engine = CalibrationEngine::new(config.practice.clone());
    let table = engine.run(&board, &mut judge)?;

    for row in table.ranking(&board).iter().take(5) {
        info!(
            "  {:>4}  accuracy {:>6}  EV {:>6}",
            row.label,
            row.accuracy.map_or("-".to_string(), |a| format!("{:.3}", a)),
            row.expected_value.map_or("-".to_string(), |v| format!("{:.2}", v)),
        );
    }

    let selector = build_selector(config.compete.strategy, &board, &table);
    let report = MatchEngine::new(config.rules.clone()).play(
        &mut judge,
        selector.as_ref(),
        config.compete.match_darts,
    )?;

    info!(
        "🏆 Final score {} ({} legs won, {} busts)",
        report.final_score, report.legs_won, report.busts
    );
    Ok(())
}
