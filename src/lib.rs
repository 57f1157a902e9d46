pub mod args;
pub mod game;
pub mod logging;
pub mod ui;
pub mod view;
