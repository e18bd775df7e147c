pub mod config;
mod controller;

pub use config::{ChatSettings, Settings};
pub use controller::ChatController;
