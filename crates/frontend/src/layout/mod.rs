pub mod navbar;
pub mod settings;

pub use navbar::Navbar;
pub use settings::SettingsPage;
