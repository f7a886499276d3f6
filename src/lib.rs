pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod tui;

mod tui_shell;
