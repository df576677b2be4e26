use crate::core::rules::{
    ChooserPlacement, DEFAULT_AUTO_CREDIT_POSITIONS, DEFAULT_DANGER_WINDOW_END,
    DEFAULT_DANGER_WINDOW_START, DEFAULT_INACTIVE_AFTER_MISSES, Rules,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_inactive_after_misses")]
    pub inactive_after_misses: usize,
    #[serde(default = "default_danger_window_start")]
    pub danger_window_start: usize,
    #[serde(default = "default_danger_window_end")]
    pub danger_window_end: usize,
    #[serde(default = "default_auto_credit_positions")]
    pub auto_credit_positions: usize,
    #[serde(default)]
    pub chooser_placement: ChooserPlacement,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_inactive_after_misses() -> usize {
    DEFAULT_INACTIVE_AFTER_MISSES
}
fn default_danger_window_start() -> usize {
    DEFAULT_DANGER_WINDOW_START
}
fn default_danger_window_end() -> usize {
    DEFAULT_DANGER_WINDOW_END
}
fn default_auto_credit_positions() -> usize {
    DEFAULT_AUTO_CREDIT_POSITIONS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            inactive_after_misses: default_inactive_after_misses(),
            danger_window_start: default_danger_window_start(),
            danger_window_end: default_danger_window_end(),
            auto_credit_positions: default_auto_credit_positions(),
            chooser_placement: ChooserPlacement::default(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hostrota")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hostrota")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hostrota.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hostrota.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.inactive_after_misses == 0 {
            return Err(AppError::Config(
                "inactive_after_misses must be at least 1".into(),
            ));
        }
        if self.danger_window_start > self.danger_window_end {
            return Err(AppError::Config(format!(
                "danger window is empty: {}..={}",
                self.danger_window_start, self.danger_window_end
            )));
        }
        Ok(())
    }

    /// Thresholds handed to the normalizer, analytics and rotation.
    pub fn rules(&self) -> Rules {
        Rules {
            auto_credit_positions: self.auto_credit_positions,
            inactive_after_misses: self.inactive_after_misses,
            danger_window_start: self.danger_window_start,
            danger_window_end: self.danger_window_end,
            chooser_placement: self.chooser_placement,
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        // Write config file
        if !is_test {
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
