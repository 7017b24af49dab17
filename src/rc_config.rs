use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Configuration loaded from a `.samlcheckrc` TOML file.
///
/// Looked up first in the working directory, then in `$HOME`.
/// CLI flags always take precedence over file values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RcConfig {
    pub login_attribute: Option<String>,
    pub name_attribute: Option<String>,
    pub email_attribute: Option<String>,
    pub group_attribute: Option<String>,
    pub sp_entity_id: Option<String>,
    pub acs_url: Option<String>,
    pub idp_entity_id: Option<String>,
    pub clock_skew_secs: Option<u32>,
    pub require_signature: Option<bool>,
    pub verbose: Option<bool>,
    pub json: Option<bool>,
    pub no_color: Option<bool>,
}

impl RcConfig {
    /// Load an explicitly named file; it must exist and parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `.samlcheckrc` from `dir`, falling back to `$HOME`.
    pub fn discover(dir: &Path) -> Self {
        let candidates = [Some(dir.join(".samlcheckrc")), dirs_home().map(|h| h.join(".samlcheckrc"))];

        for candidate in candidates.iter().flatten() {
            if !candidate.is_file() {
                continue;
            }
            match Self::from_file(candidate) {
                Ok(cfg) => {
                    debug!(path = %candidate.display(), "loaded configuration");
                    return cfg;
                }
                Err(e) => warn!(path = %candidate.display(), error = %format!("{:#}", e), "ignoring configuration file"),
            }
        }

        RcConfig::default()
    }
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
