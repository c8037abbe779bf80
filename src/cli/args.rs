//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "reactive-chess",
    about = "A chess board that keeps its legal moves current by propagating changes between squares ♛"
)]
pub enum Chess {
    #[structopt(
        name = "watch",
        about = "Watch two computer strategies play each other. Pick each side with `--white` and `--black` (random, greedy, lookahead, alpha-beta; default: alpha-beta). `--depth` sets the alpha-beta depth (default: 2), `--seed` makes the games repeatable, `--max-plies` cuts long games short and `--games` plays a series and reports the final score."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions from the starting position for every depth up to `--depth` (default: 4), and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
    #[structopt(
        name = "best-move",
        about = "Play the comma-separated `--moves` (e.g. e2e4,e7e5) from the starting position and print the move the chosen `--strategy` (default: alpha-beta) would make next."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Watch(cmd),
            CountPositions(cmd),
            BestMove(cmd),
        }
    }
}
