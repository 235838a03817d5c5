//! Terminal UI: event loop and board rendering for playing Connect Four.

mod app;
mod game_view;

pub use app::App;
