mod settings;

pub use settings::{ChatSettings, Settings};
