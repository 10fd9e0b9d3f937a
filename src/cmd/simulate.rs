use super::build_selector;
use crate::reports;
use clap::Args;
use darts501::board::Board;
use darts501::calibration::CalibrationEngine;
use darts501::config::Config;
use darts501::game::{MatchEngine, MatchReport};
use darts501::judge::{SimulatedJudge, ThrowerProfile};
use darts501::DartsResult;
use rayon::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub profile: ThrowerProfile,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Independent matches to play after practice (run in parallel).
    #[arg(short = 'm', long, default_value_t = 0)]
    pub matches: usize,

    /// Rows of the calibration ranking to print.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Write the full calibration ranking to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: SimulateArgs, config: Config) -> DartsResult<()> {
    let board = Board::build(&config.board)?;
    let start = Instant::now();

    let mut practice_judge = SimulatedJudge::new(board.clone(), args.profile.clone(), args.seed);
    let table = CalibrationEngine::new(config.practice.clone()).run(&board, &mut practice_judge)?;
    info!(
        "Practice finished: {} darts in {:.2}s",
        practice_judge.throws(),
        start.elapsed().as_secs_f32()
    );

    let ranking = table.ranking(&board);
    reports::print_ranking(&ranking, args.top);

    if let Some(path) = &args.export {
        table.write_csv(&board, File::create(path)?)?;
        info!("💾 Calibration exported to {}", path.display());
    }

    if args.matches == 0 {
        return Ok(());
    }

    let selector = build_selector(config.compete.strategy, &board, &table);
    let engine = MatchEngine::new(config.rules.clone());
    let darts = config.compete.match_darts;

    info!("🔥 Playing {} matches of {} darts", args.matches, darts);
    let results: Vec<MatchReport> = (0..args.matches)
        .into_par_iter()
        .map(|i| {
            // Each match gets its own judge; seeds are offset past the practice seed.
            let seed = args.seed.map(|s| s.wrapping_add(1 + i as u64));
            let mut judge = SimulatedJudge::new(board.clone(), args.profile.clone(), seed);
            engine.play(&mut judge, selector.as_ref(), darts)
        })
        .collect::<DartsResult<Vec<_>>>()?;

    reports::print_match_summary(&results);
    Ok(())
}
