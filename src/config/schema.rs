//! Configuration schema.
//!
//! ```yaml
//! install_hint:
//!   package: whatlies
//!   installer: pip        # or "cargo"
//!   doc_url: https://rasahq.github.io/whatlies/#installation
//! ```

use crate::placeholder::InstallHint;
use serde::{Deserialize, Serialize};

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtrasConfig {
    /// How missing-dependency messages describe the fix.
    pub install_hint: InstallHint,
}
