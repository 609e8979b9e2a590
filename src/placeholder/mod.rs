//! Placeholders for optional backends.
//!
//! When a backend's install extra is not enabled, the library binds a
//! [`NotInstalled`] under the backend's name instead of the backend
//! itself. Nothing fails until the backend is used; then the caller gets
//! a `MissingDependency` error that says what to install.
//!
//! # Modules
//!
//! - [`component`] - Capability trait shared by backends and stubs
//! - [`hint`] - Install command and guide link rendering
//! - [`not_installed`] - The placeholder itself
//! - [`optional`] - Backend-or-placeholder union

pub mod component;
pub mod hint;
pub mod not_installed;
pub mod optional;

pub use component::{Component, Stub};
pub use hint::{InstallHint, Installer, DEFAULT_DOC_URL, DEFAULT_PACKAGE};
pub use not_installed::NotInstalled;
pub use optional::Optional;
