//! Optional integrations known to the library.
//!
//! # Modules
//!
//! - [`registry`] - Built-in integrations and placeholder lookup

pub mod registry;

pub use registry::{Integration, IntegrationRegistry};
