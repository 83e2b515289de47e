use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use harvestx_core::{CoreSettings, FEATURED_COUNT, REDIRECT_DELAY};
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "harvestx.ron";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to ./harvestx.log in current directory.
    #[default]
    File,
    /// Write to terminal (stderr/stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON catalog to load instead of the embedded seed.
    pub catalog_path: Option<PathBuf>,
    pub redirect_delay_ms: u64,
    pub log_destination: LogDestination,
    pub featured_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            redirect_delay_ms: REDIRECT_DELAY.as_millis() as u64,
            log_destination: LogDestination::default(),
            featured_count: FEATURED_COUNT,
        }
    }
}

impl AppConfig {
    pub fn core_settings(&self) -> CoreSettings {
        CoreSettings {
            redirect_delay: Duration::from_millis(self.redirect_delay_ms),
            featured_count: self.featured_count,
        }
    }

    /// Resolves a relative catalog path against the config directory.
    pub fn catalog_path_in(&self, dir: &Path) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                dir.join(path)
            }
        })
    }
}

/// Reads `{dir}/harvestx.ron`; `Ok(None)` when the file does not exist.
pub(crate) fn load_config(dir: &Path) -> anyhow::Result<Option<AppConfig>> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };

    let config = ron::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(config))
}
