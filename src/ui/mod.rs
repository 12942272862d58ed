//! Terminal UI for playing Align Four against a friend or the computer.

mod app;
mod game_view;

pub use app::App;
