//! Install hints rendered into `MissingDependency` messages.
//!
//! An [`InstallHint`] names the package that carries the optional extras,
//! the installer used to add an extra, and the page with the full
//! installation guide. The default reproduces the whatlies pip wording.

use serde::{Deserialize, Serialize};

/// Package name used by the default hint.
pub const DEFAULT_PACKAGE: &str = "whatlies";

/// Installation guide linked from the default hint.
pub const DEFAULT_DOC_URL: &str = "https://rasahq.github.io/whatlies/#installation";

/// How an install extra gets added to a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Installer {
    /// `pip install package[extra]`
    #[default]
    Pip,
    /// `cargo add package --features extra`
    Cargo,
}

/// Parameters for the install instruction shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallHint {
    /// Package that provides the extras.
    pub package: String,
    /// Installer flavour for the install command.
    pub installer: Installer,
    /// Link to the installation guide.
    pub doc_url: String,
}

impl Default for InstallHint {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            installer: Installer::Pip,
            doc_url: DEFAULT_DOC_URL.to_string(),
        }
    }
}

impl InstallHint {
    /// Create a hint for a package with the given installer and guide URL.
    pub fn new(
        package: impl Into<String>,
        installer: Installer,
        doc_url: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            installer,
            doc_url: doc_url.into(),
        }
    }

    /// The command that installs `extra`.
    pub fn install_command(&self, extra: &str) -> String {
        match self.installer {
            Installer::Pip => format!("pip install {}[{}]", self.package, extra),
            Installer::Cargo => format!("cargo add {} --features {}", self.package, extra),
        }
    }

    /// Render the full message for a missing `tool` provided by `extra`.
    ///
    /// Three blocks separated by blank lines: what is needed, the install
    /// command, and the guide link.
    pub fn message(&self, tool: &str, extra: &str) -> String {
        format!(
            "In order to use {} you'll need to install via;\n\n{}\n\nSee installation guide here: {}.",
            tool,
            self.install_command(extra),
            self.doc_url
        )
    }
}
