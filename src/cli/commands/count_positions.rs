//! Count positions command - count possible positions at a given depth.

use reactive_chess::game::position_counter::run_count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        if let Err(error) = run_count_positions(self.depth) {
            eprintln!("Failed to count positions: {}", error);
            std::process::exit(1);
        }
    }
}
