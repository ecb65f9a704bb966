pub mod activity;
pub mod preferences;

pub use activity::ActivityCommands;
pub use preferences::PreferencesCommands;
