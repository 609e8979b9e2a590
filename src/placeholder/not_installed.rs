//! The placeholder bound in place of a backend whose extra is not enabled.

use std::convert::Infallible;

use crate::error::{Result, WhatliesError};
use crate::placeholder::component::Stub;
use crate::placeholder::hint::InstallHint;

/// Stand-in for an optional backend that was not installed.
///
/// Constructing one never fails and performs no validation; empty names
/// are accepted as given. Every use goes through [`NotInstalled::invoke`]
/// (or the [`Component`](crate::placeholder::Component) impl of a
/// [`Stub`]) and fails with [`WhatliesError::MissingDependency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotInstalled {
    tool: String,
    dependency_extra: String,
    hint: InstallHint,
}

impl NotInstalled {
    /// Placeholder for `tool`, provided by the install extra `dependency_extra`.
    pub fn new(tool: impl Into<String>, dependency_extra: impl Into<String>) -> Self {
        Self::with_hint(tool, dependency_extra, InstallHint::default())
    }

    /// Placeholder that renders its message with a custom install hint.
    pub fn with_hint(
        tool: impl Into<String>,
        dependency_extra: impl Into<String>,
        hint: InstallHint,
    ) -> Self {
        Self {
            tool: tool.into(),
            dependency_extra: dependency_extra.into(),
            hint,
        }
    }

    /// Display name of the missing backend.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Install extra that provides the backend.
    pub fn dependency_extra(&self) -> &str {
        &self.dependency_extra
    }

    pub fn hint(&self) -> &InstallHint {
        &self.hint
    }

    /// The message users see when the backend is used.
    pub fn message(&self) -> String {
        self.hint.message(&self.tool, &self.dependency_extra)
    }

    /// The error every use of this placeholder produces.
    pub fn error(&self) -> WhatliesError {
        WhatliesError::MissingDependency {
            tool: self.tool.clone(),
            dependency_extra: self.dependency_extra.clone(),
            message: self.message(),
        }
    }

    /// Use the placeholder as if it were the real backend.
    ///
    /// The argument is whatever the real call site would pass; it is ignored.
    /// This never returns `Ok`.
    pub fn invoke<A>(&self, _args: A) -> Result<Infallible> {
        Err(self.error())
    }

    /// Wrap this placeholder so it implements a backend's
    /// [`Component`](crate::placeholder::Component) signature.
    pub fn stub<A, O>(&self) -> Stub<A, O> {
        Stub::new(self.clone())
    }
}
