use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tracing::info;
use tracing::warn;
use tracing_unwrap::ResultExt;

/// Host settings read from a RON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Line editor history, not roll history
    pub(crate) history_file: PathBuf,
    pub(crate) prompt: String,
    /// Roll the best entry as soon as a query is entered
    pub(crate) auto_trigger: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            history_file: PathBuf::from("history"),
            prompt: "dicer".to_owned(),
            auto_trigger: true,
        }
    }
}

impl Settings {
    /// Missing or malformed files fall back to defaults
    pub(crate) fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|error| {
                warn!("Ignoring settings `{:?}`: {}", path, error);
                Self::default()
            }),
            Err(error) => {
                info!("No settings at `{:?}` ({}), using defaults", path, error);
                Self::default()
            }
        }
    }

    pub(crate) fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::de::from_str(content)
    }

    pub(crate) fn dump(&self) -> String {
        ron::ser::to_string_pretty(self, Default::default()).unwrap_or_log()
    }
}
