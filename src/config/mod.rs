//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::RolodexPaths;
pub use settings::Settings;
