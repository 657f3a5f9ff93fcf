//! User configuration at ~/.config/monthcal/config.toml

use std::path::{Path, PathBuf};

use chrono::Weekday;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{CalError, CalResult};
use crate::store::PredefinedSource;

static DEFAULT_DATA_DIR: &str = "~/.local/share/monthcal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthcalConfig {
    /// Where user events are stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// JSON file replacing the bundled predefined events
    #[serde(default)]
    pub predefined_events: Option<PathBuf>,

    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for MonthcalConfig {
    fn default() -> Self {
        MonthcalConfig {
            data_dir: default_data_dir(),
            predefined_events: None,
            week_start: WeekStart::default(),
        }
    }
}

impl MonthcalConfig {
    pub fn config_path() -> CalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalError::Config("Could not determine config directory".into()))?
            .join("monthcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, creating a commented default one first if
    /// there is none. `MONTHCAL_*` environment variables override file values.
    pub fn load() -> CalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("MONTHCAL"))
            .build()
            .map_err(|e| CalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn predefined_source(&self) -> PredefinedSource {
        match &self.predefined_events {
            Some(path) => PredefinedSource::File(expand(path)),
            None => PredefinedSource::Bundled,
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalResult<()> {
        let contents = format!(
            "\
# monthcal configuration

# Where your own events are stored:
# data_dir = \"{}\"

# JSON file to use instead of the bundled predefined events:
# predefined_events = \"~/calendar/holidays.json\"

# First day of the week in the month view (\"sunday\" or \"monday\"):
# week_start = \"sunday\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
