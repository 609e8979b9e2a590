//! Configuration loading and parsing.
//!
//! # Modules
//!
//! - [`loader`] - File discovery, parsing, and environment overrides
//! - [`schema`] - Configuration types

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, load_config, load_config_file, parse_config, project_config_path,
    DOC_URL_ENV,
};
pub use schema::ExtrasConfig;
