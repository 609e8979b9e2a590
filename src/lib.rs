//! whatlies-extras - Placeholders for optional whatlies backends.
//!
//! Each optional backend is gated behind an install extra (a cargo
//! feature). When the extra is not enabled, the backend's name is bound to
//! a [`NotInstalled`] placeholder instead. Loading never fails; using the
//! backend returns a [`WhatliesError::MissingDependency`] that says what
//! to install.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading for install hints
//! - [`error`] - Error types and result aliases
//! - [`integrations`] - Registry of known optional backends
//! - [`placeholder`] - The placeholder, install hints, and `Optional`
//!
//! # Example
//!
//! ```
//! use whatlies_extras::{NotInstalled, WhatliesError};
//!
//! let spacy = NotInstalled::new("spaCy", "spacy");
//! let err = spacy.invoke(("en_core_web_sm",)).unwrap_err();
//! assert!(matches!(err, WhatliesError::MissingDependency { .. }));
//! assert!(err.to_string().contains("pip install whatlies[spacy]"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod integrations;
pub mod placeholder;

pub use error::{Result, WhatliesError};
pub use integrations::{Integration, IntegrationRegistry};
pub use placeholder::{Component, InstallHint, Installer, NotInstalled, Optional, Stub};
