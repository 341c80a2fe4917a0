pub mod settings;
pub mod site;

pub use settings::AppConfig;
pub use site::{KnownSite, known_sites};
