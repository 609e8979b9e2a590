//! A backend that is either present or replaced by its placeholder.

use crate::error::Result;
use crate::placeholder::component::Component;
use crate::placeholder::hint::InstallHint;
use crate::placeholder::not_installed::NotInstalled;

/// The real backend, or the placeholder bound under its name.
#[derive(Debug, Clone)]
pub enum Optional<T> {
    /// The backend's extra is enabled.
    Available(T),
    /// The backend's extra is not enabled.
    Unavailable(NotInstalled),
}

impl<T> Optional<T> {
    /// Build the backend with `make` when `enabled`, otherwise bind a
    /// placeholder for `tool` / `extra`.
    ///
    /// Typically called with `cfg!(feature = "...")`.
    pub fn from_feature<F>(enabled: bool, tool: &str, extra: &str, make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::from_feature_with_hint(enabled, tool, extra, InstallHint::default(), make)
    }

    /// Like [`Optional::from_feature`], rendering errors with `hint`.
    pub fn from_feature_with_hint<F>(
        enabled: bool,
        tool: &str,
        extra: &str,
        hint: InstallHint,
        make: F,
    ) -> Self
    where
        F: FnOnce() -> T,
    {
        if enabled {
            Optional::Available(make())
        } else {
            tracing::debug!("Binding placeholder for '{}' (extra '{}')", tool, extra);
            Optional::Unavailable(NotInstalled::with_hint(tool, extra, hint))
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Optional::Available(_))
    }

    /// The backend, or the placeholder's `MissingDependency` error.
    pub fn get(&self) -> Result<&T> {
        match self {
            Optional::Available(inner) => Ok(inner),
            Optional::Unavailable(placeholder) => Err(placeholder.error()),
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Optional::Available(inner) => Ok(inner),
            Optional::Unavailable(placeholder) => Err(placeholder.error()),
        }
    }

    /// The placeholder, if the backend is missing.
    pub fn placeholder(&self) -> Option<&NotInstalled> {
        match self {
            Optional::Available(_) => None,
            Optional::Unavailable(placeholder) => Some(placeholder),
        }
    }
}

impl<C: Component> Component for Optional<C> {
    type Args = C::Args;
    type Output = C::Output;

    fn construct(&self, args: C::Args) -> Result<C::Output> {
        match self {
            Optional::Available(inner) => inner.construct(args),
            Optional::Unavailable(placeholder) => match placeholder.invoke(args)? {},
        }
    }
}
