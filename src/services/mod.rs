pub mod games;
pub mod players;
pub mod roster;
pub mod settings;

pub use games::GameRegistry;
pub use players::PlayerRegistry;
pub use roster::Roster;
pub use settings::SettingsStore;
