//! Layered configuration: built-in defaults, then an optional TOML file, then CLI flags,
//! then `-S key=value` overrides.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
