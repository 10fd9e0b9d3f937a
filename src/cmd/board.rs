use crate::reports;
use clap::Args;
use darts501::board::Board;
use darts501::config::Config;
use darts501::DartsResult;

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: BoardArgs, config: Config) -> DartsResult<()> {
    let board = Board::build(&config.board)?;
    reports::print_board(&board);
    Ok(())
}
