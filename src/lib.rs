pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod searcher;
