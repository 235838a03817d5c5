//! Core Connect Four game logic: board representation, player types, rules,
//! and the turn-clocked game engine.

mod board;
mod clock;
mod engine;
mod player;
mod rules;

pub use board::{Board, Cell};
pub use clock::TurnClock;
pub use engine::{GameEngine, GameEvent, GameStatus};
pub use player::Player;
pub use rules::Rules;
