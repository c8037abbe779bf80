//! Best move command - report the move a strategy picks after a move list.

use reactive_chess::board::Board;
use reactive_chess::chess_move::{Action, Move};
use reactive_chess::searcher::{ComputerPlayer, Player, SearchConfig, Strategy};
use structopt::StructOpt;

use super::util::create_rng;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: Strategy,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(long, use_delimiter = true)]
    pub moves: Vec<Move>,
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = Board::starting_position();
        for chess_move in self.moves.iter() {
            if let Err(error) = board.apply(*chess_move) {
                eprintln!("Cannot play {}: {}", chess_move, error);
                std::process::exit(1);
            }
        }
        println!("{}", board);

        let mut player = ComputerPlayer::new(self.strategy, SearchConfig { depth: self.depth });
        let mut rng = create_rng(self.seed);
        match player.select_action(&board, &mut rng) {
            Ok(Action::Move(chess_move)) => println!("{}", chess_move),
            Ok(action) => println!("{}", action),
            Err(error) => {
                eprintln!("There is no move to make in this position: {}", error);
                std::process::exit(1);
            }
        }
    }
}
