//! Handler modules for keyboard input, the name-entry gate and scoreboard actions.

mod game_handler;
mod input_handler;
mod setup_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
pub use setup_handler::SetupHandler;
