pub mod args;
pub mod console;
pub mod export;
pub mod logging;
pub mod tracker;
pub mod ui;
