use rand::rngs::StdRng;
use rand::SeedableRng;
use reactive_chess::board::{Board, GameState};
use reactive_chess::game::{GameConfig, GameLoop, Outcome};
use reactive_chess::searcher::{ComputerPlayer, SearchConfig, Strategy};

fn play(white: Strategy, black: Strategy, seed: u64, max_plies: usize) -> (Outcome, Board) {
    let config = SearchConfig { depth: 1 };
    let mut game = GameLoop::new(
        Board::starting_position(),
        Box::new(ComputerPlayer::new(white, config)),
        Box::new(ComputerPlayer::new(black, config)),
    )
    .with_config(GameConfig {
        max_plies: Some(max_plies),
    });
    let outcome = game.run(&mut StdRng::seed_from_u64(seed)).unwrap();
    (outcome, game.into_board())
}

#[test]
fn test_random_games_stay_consistent() {
    for seed in 0..4 {
        let (outcome, mut board) = play(Strategy::Random, Strategy::Random, seed, 80);
        match outcome {
            Outcome::PlyLimit => assert!(!board.game_over()),
            Outcome::Stalemate => assert_eq!(board.state(), GameState::Stalemate),
            Outcome::CheckmateWhiteWins | Outcome::CheckmateBlackWins => {
                assert_eq!(board.state(), GameState::Checkmate)
            }
            resigned => panic!("computer players never resign, got {:?}", resigned),
        }

        // the whole game unwinds back to the starting position
        while board.history_len() > 0 {
            board.undo().unwrap();
        }
        let start = Board::starting_position();
        assert_eq!(board.legal_moves(), start.legal_moves());
        assert_eq!(board.to_string(), start.to_string());
    }
}

#[test]
fn test_alpha_beta_against_lookahead_finishes_cleanly() {
    let (outcome, board) = play(Strategy::AlphaBeta, Strategy::Lookahead, 11, 8);
    if outcome == Outcome::PlyLimit {
        assert_eq!(board.history_len(), 8);
        assert!(!board.game_over());
    } else {
        assert!(board.game_over(), "{:?} but the game is still on", outcome);
    }
}
