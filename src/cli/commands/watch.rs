//! Watch command - watch two computer strategies play each other.

use std::io;
use std::time::Duration;

use reactive_chess::board::Board;
use reactive_chess::game::renderer::TextRenderer;
use reactive_chess::game::{GameConfig, GameLoop, Score};
use reactive_chess::searcher::{ComputerPlayer, SearchConfig, Strategy};
use structopt::StructOpt;

use super::util::create_rng;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "alpha-beta")]
    pub white: Strategy,
    #[structopt(long, default_value = "alpha-beta")]
    pub black: Strategy,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(long = "max-plies")]
    pub max_plies: Option<usize>,
    #[structopt(long, default_value = "1")]
    pub games: u32,
    #[structopt(
        long = "delay",
        default_value = "0",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let search_config = SearchConfig { depth: self.depth };
        let game_config = GameConfig {
            max_plies: self.max_plies,
        };
        let mut rng = create_rng(self.seed);
        let mut score = Score::new();

        for _ in 0..self.games {
            let mut renderer = TextRenderer::new(io::stdout());
            if self.delay_ms > 0 {
                renderer = renderer.with_delay(Duration::from_millis(self.delay_ms));
            }

            let mut game = GameLoop::new(
                Board::starting_position(),
                Box::new(ComputerPlayer::new(self.white, search_config)),
                Box::new(ComputerPlayer::new(self.black, search_config)),
            )
            .with_config(game_config)
            .with_renderer(Box::new(renderer));

            match game.run(&mut rng) {
                Ok(outcome) => {
                    println!("{}", outcome);
                    score.record(outcome);
                }
                Err(error) => {
                    eprintln!("Game aborted: {}", error);
                    std::process::exit(1);
                }
            }
        }

        println!("{}", score);
    }
}
