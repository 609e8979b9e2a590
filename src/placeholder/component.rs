//! Capability interface shared by real backends and their placeholders.

use std::fmt;
use std::marker::PhantomData;

use crate::error::Result;
use crate::placeholder::not_installed::NotInstalled;

/// Something a caller can construct or call to get a backend's output.
///
/// Real backends implement this directly. A [`Stub`] implements it for a
/// missing backend so call sites do not special-case the placeholder.
pub trait Component {
    /// Arguments the backend takes.
    type Args;
    /// What a successful call produces.
    type Output;

    fn construct(&self, args: Self::Args) -> Result<Self::Output>;
}

/// A [`NotInstalled`] placeholder typed as a particular backend.
pub struct Stub<A, O> {
    placeholder: NotInstalled,
    _signature: PhantomData<fn(A) -> O>,
}

impl<A, O> Stub<A, O> {
    pub fn new(placeholder: NotInstalled) -> Self {
        Self {
            placeholder,
            _signature: PhantomData,
        }
    }

    pub fn placeholder(&self) -> &NotInstalled {
        &self.placeholder
    }
}

impl<A, O> Clone for Stub<A, O> {
    fn clone(&self) -> Self {
        Self::new(self.placeholder.clone())
    }
}

impl<A, O> fmt::Debug for Stub<A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stub")
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

impl<A, O> Component for Stub<A, O> {
    type Args = A;
    type Output = O;

    fn construct(&self, args: A) -> Result<O> {
        match self.placeholder.invoke(args)? {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WhatliesError;

    struct Tokenizer;

    impl Component for Tokenizer {
        type Args = String;
        type Output = Vec<String>;

        fn construct(&self, args: String) -> Result<Vec<String>> {
            Ok(args.split_whitespace().map(str::to_string).collect())
        }
    }

    fn tokenize<C: Component<Args = String, Output = Vec<String>>>(
        backend: &C,
        text: &str,
    ) -> Result<Vec<String>> {
        backend.construct(text.to_string())
    }

    #[test]
    fn real_component_returns_output() {
        let tokens = tokenize(&Tokenizer, "hello world").unwrap();
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn stub_fails_through_same_call_site() {
        let stub: Stub<String, Vec<String>> = NotInstalled::new("spaCy", "spacy").stub();
        let err = tokenize(&stub, "hello world").unwrap_err();
        assert!(matches!(err, WhatliesError::MissingDependency { .. }));
        assert!(err.to_string().contains("pip install whatlies[spacy]"));
    }

    #[test]
    fn stub_clone_keeps_placeholder() {
        let stub: Stub<(), ()> = NotInstalled::new("UMAP", "umap").stub();
        let cloned = stub.clone();
        assert_eq!(cloned.placeholder().tool(), "UMAP");
        assert!(format!("{cloned:?}").contains("UMAP"));
    }
}
