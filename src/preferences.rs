use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoPreferences {
    /// Capacity of the demo buffer.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Values fed to the buffer, in order. The demo uses the first four.
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

pub const MAX_DEMO_CAPACITY: usize = 4096;
const DEMO_ITEM_COUNT: usize = 4;
fn default_capacity() -> usize { 3 }
fn default_items() -> Vec<String> {
    ["a", "b", "c", "d"].into_iter().map(String::from).collect()
}

impl Default for DemoPreferences {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            items: default_items(),
        }
    }
}

impl DemoPreferences {
    /// Linux → ~/.config/ringq/
    /// Windows → AppData/Local/ringq/
    fn config_dir() -> PathBuf {
        dirs::config_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ringq")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("demo.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Missing or malformed files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let mut prefs: Self = serde_json::from_str(&contents).unwrap_or_else(|e| {
                    warn!(path = %path.display(), "invalid demo preferences, using defaults: {e}");
                    Self::default()
                });
                prefs.sanitize();
                prefs
            }
            Err(e) => {
                debug!(path = %path.display(), "no demo preferences loaded: {e}");
                Self::default()
            }
        }
    }

    /// Clamp values loaded from disk or the command line into their valid ranges.
    pub fn sanitize(&mut self) {
        self.capacity = self.capacity.clamp(1, MAX_DEMO_CAPACITY);
        if self.items.len() < DEMO_ITEM_COUNT {
            self.items = default_items();
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("failed to serialize demo preferences")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
