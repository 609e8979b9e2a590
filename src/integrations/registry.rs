//! Integration registry and definitions.
//!
//! Lists the optional backends the library knows about, which install
//! extra provides each one, and whether that extra was compiled in. The
//! registry is where a missing backend gets its placeholder.

use crate::error::{Result, WhatliesError};
use crate::placeholder::{InstallHint, NotInstalled};
use serde::Serialize;
use std::collections::HashMap;

/// An optional backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Integration {
    /// Lookup name (e.g., "spacy", "sentence_tfm")
    pub name: String,
    /// Display name used in messages (e.g., "spaCy")
    pub tool: String,
    /// Install extra / cargo feature that provides it
    pub extra: String,
    /// Whether the extra is enabled in this build
    pub available: bool,
    /// One-line description
    pub description: String,
}

/// Registry of all known integrations.
#[derive(Debug, Clone)]
pub struct IntegrationRegistry {
    integrations: HashMap<String, Integration>,
    hint: InstallHint,
}

macro_rules! builtin {
    ($map:ident, $name:literal, $tool:literal, $description:literal) => {
        $map.insert(
            $name.to_string(),
            Integration {
                name: $name.to_string(),
                tool: $tool.to_string(),
                extra: $name.to_string(),
                available: cfg!(feature = $name),
                description: $description.to_string(),
            },
        );
    };
}

impl IntegrationRegistry {
    /// Create a registry with the built-in integrations.
    pub fn new() -> Self {
        let mut integrations = HashMap::new();

        // Language backends
        builtin!(integrations, "spacy", "spaCy", "spaCy language models");
        builtin!(integrations, "fasttext", "fastText", "fastText word vectors");
        builtin!(integrations, "sense2vec", "sense2vec", "sense2vec phrase vectors");
        builtin!(integrations, "tfhub", "TensorFlow Hub", "TensorFlow Hub encoders");
        builtin!(
            integrations,
            "transformers",
            "Hugging Face transformers",
            "Hugging Face transformer models"
        );
        builtin!(
            integrations,
            "sentence_tfm",
            "sentence-transformers",
            "Sentence embedding models"
        );
        builtin!(integrations, "gensim", "gensim", "gensim keyed vectors");
        builtin!(integrations, "floret", "floret", "floret subword vectors");

        // Transformers
        builtin!(integrations, "umap", "UMAP", "UMAP dimensionality reduction");
        builtin!(integrations, "ivis", "Ivis", "Ivis dimensionality reduction");
        builtin!(integrations, "opentsne", "openTSNE", "openTSNE embedding");

        Self {
            integrations,
            hint: InstallHint::default(),
        }
    }

    /// Render placeholder messages with `hint` instead of the default.
    pub fn with_hint(mut self, hint: InstallHint) -> Self {
        self.hint = hint;
        self
    }

    /// Insert an integration directly (test-only).
    #[cfg(test)]
    pub(crate) fn insert(&mut self, integration: Integration) {
        self.integrations
            .insert(integration.name.clone(), integration);
    }

    pub fn hint(&self) -> &InstallHint {
        &self.hint
    }

    /// Look up an integration by name.
    pub fn get(&self, name: &str) -> Option<&Integration> {
        self.integrations.get(name)
    }

    /// Look up an integration, failing for unknown names.
    pub fn resolve(&self, name: &str) -> Result<&Integration> {
        self.get(name)
            .ok_or_else(|| WhatliesError::UnknownIntegration {
                name: name.to_string(),
            })
    }

    /// All known integration names, sorted.
    pub fn known_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.integrations.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// All integrations, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Integration> {
        let mut all: Vec<&Integration> = self.integrations.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all.into_iter()
    }

    /// The placeholder for a known integration.
    ///
    /// Returns one even when the integration is available, so callers can
    /// preview the message.
    pub fn placeholder(&self, name: &str) -> Option<NotInstalled> {
        self.get(name).map(|integration| {
            NotInstalled::with_hint(&integration.tool, &integration.extra, self.hint.clone())
        })
    }

    /// Succeeds if the integration is available; otherwise uses its
    /// placeholder and returns the resulting `MissingDependency` error.
    pub fn require(&self, name: &str) -> Result<&Integration> {
        let integration = self.resolve(name)?;
        if integration.available {
            tracing::debug!("Integration '{}' is available", name);
            return Ok(integration);
        }

        tracing::debug!(
            "Integration '{}' not compiled in, substituting placeholder",
            name
        );
        let placeholder =
            NotInstalled::with_hint(&integration.tool, &integration.extra, self.hint.clone());
        match placeholder.invoke(())? {}
    }
}

impl Default for IntegrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::Installer;

    fn unavailable(name: &str, tool: &str) -> Integration {
        Integration {
            name: name.to_string(),
            tool: tool.to_string(),
            extra: name.to_string(),
            available: false,
            description: String::new(),
        }
    }

    #[test]
    fn registry_new_has_builtins() {
        let registry = IntegrationRegistry::new();
        let names = registry.known_names();
        for expected in [
            "spacy",
            "fasttext",
            "sense2vec",
            "tfhub",
            "transformers",
            "sentence_tfm",
            "gensim",
            "floret",
            "umap",
            "ivis",
            "opentsne",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn known_names_are_sorted() {
        let registry = IntegrationRegistry::new();
        let names = registry.known_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let registry = IntegrationRegistry::new();
        let names: Vec<&str> = registry.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, registry.known_names());
    }

    #[test]
    fn builtin_extra_matches_name() {
        let registry = IntegrationRegistry::new();
        let spacy = registry.get("spacy").unwrap();
        assert_eq!(spacy.tool, "spaCy");
        assert_eq!(spacy.extra, "spacy");
    }

    #[test]
    fn availability_follows_features() {
        let registry = IntegrationRegistry::new();
        assert_eq!(
            registry.get("fasttext").unwrap().available,
            cfg!(feature = "fasttext")
        );
        assert_eq!(
            registry.get("umap").unwrap().available,
            cfg!(feature = "umap")
        );
    }

    #[test]
    fn resolve_unknown_is_error() {
        let registry = IntegrationRegistry::new();
        let err = registry.resolve("word2vec").unwrap_err();
        assert!(matches!(err, WhatliesError::UnknownIntegration { ref name } if name == "word2vec"));
    }

    #[test]
    fn placeholder_for_unknown_is_none() {
        let registry = IntegrationRegistry::new();
        assert!(registry.placeholder("word2vec").is_none());
    }

    #[test]
    fn placeholder_uses_display_name() {
        let registry = IntegrationRegistry::new();
        let placeholder = registry.placeholder("tfhub").unwrap();
        assert_eq!(placeholder.tool(), "TensorFlow Hub");
        assert!(placeholder
            .message()
            .contains("pip install whatlies[tfhub]"));
    }

    #[test]
    fn require_missing_is_missing_dependency() {
        let mut registry = IntegrationRegistry::new();
        registry.insert(unavailable("word2vec", "word2vec"));
        let err = registry.require("word2vec").unwrap_err();
        assert!(err.is_missing_dependency());
        assert!(err
            .to_string()
            .starts_with("In order to use word2vec you'll need to install via;"));
    }

    #[test]
    fn require_available_is_ok() {
        let mut registry = IntegrationRegistry::new();
        let mut glove = unavailable("glove", "GloVe");
        glove.available = true;
        registry.insert(glove);
        assert_eq!(registry.require("glove").unwrap().tool, "GloVe");
    }

    #[test]
    fn require_unknown_is_unknown_integration() {
        let registry = IntegrationRegistry::new();
        let err = registry.require("nope").unwrap_err();
        assert!(matches!(err, WhatliesError::UnknownIntegration { .. }));
    }

    #[test]
    fn with_hint_changes_messages() {
        let hint = InstallHint::new("whatlies-rs", Installer::Cargo, "https://docs.rs/whatlies-rs");
        let mut registry = IntegrationRegistry::new().with_hint(hint);
        registry.insert(unavailable("glove", "GloVe"));
        let err = registry.require("glove").unwrap_err();
        assert!(err
            .to_string()
            .contains("cargo add whatlies-rs --features glove"));
    }
}
