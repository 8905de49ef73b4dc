use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured root directory.
pub const ROOT_ENV: &str = "WSNAV_ROOT";

/// Settings for one invocation. No process-wide instance exists; the
/// loaded value is passed explicitly to every handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub root_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_directory: default_root(),
        }
    }
}

impl Config {
    /// Resolve configuration with the usual priority: explicit file, then
    /// the default config location, then built-in defaults; `WSNAV_ROOT`
    /// overrides the root either way. The resolved root must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config file {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("cannot parse config file {}", path.display()))?
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };

        if let Ok(env_root) = std::env::var(ROOT_ENV) {
            config.root_directory = expand_tilde(&env_root);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("cannot parse config file {}", path.display()))?;
        Ok(config)
    }

    /// `<config dir>/wsnav/config.toml`, or None on systems without a
    /// standard config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wsnav").join("config.toml"))
    }

    /// The discoverer treats a bad root as a precondition failure, so it
    /// is rejected here before any command runs.
    fn validate(&self) -> Result<()> {
        if !self.root_directory.is_dir() {
            bail!(
                "root directory does not exist: {}",
                self.root_directory.display()
            );
        }
        Ok(())
    }
}

fn default_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Workspace"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
