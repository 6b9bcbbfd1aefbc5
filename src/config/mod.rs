use crate::core::calculator::consolidate::DurationPolicy;
use crate::core::calculator::window::WorkWindow;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Working window: entries clocked outside it never enter a
    /// consolidated span.
    #[serde(default = "default_window_start")]
    pub work_window_start: String,
    #[serde(default = "default_window_end")]
    pub work_window_end: String,

    /// Daily instant at which the sweep force-stops stale sessions.
    #[serde(default = "default_cutoff")]
    pub auto_stop_cutoff: String,

    /// Minutes between sweep passes in `sweep --watch`.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_minutes: u64,

    /// How a consolidated day total is computed; applied uniformly at every
    /// call site.
    #[serde(default)]
    pub duration_policy: DurationPolicy,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_window_start() -> String {
    "06:00".to_string()
}
fn default_window_end() -> String {
    "22:00".to_string()
}
fn default_cutoff() -> String {
    "22:00".to_string()
}
fn default_sweep_interval() -> u64 {
    5
}
fn default_page_size() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            work_window_start: default_window_start(),
            work_window_end: default_window_end(),
            auto_stop_cutoff: default_cutoff(),
            sweep_interval_minutes: default_sweep_interval(),
            duration_policy: DurationPolicy::default(),
            default_page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    // ---------------------------
    // Typed accessors
    // ---------------------------

    pub fn work_window(&self) -> AppResult<WorkWindow> {
        let start = self.parse_bound(&self.work_window_start)?;
        let end = self.parse_bound(&self.work_window_end)?;
        WorkWindow::new(start, end)
    }

    pub fn cutoff(&self) -> AppResult<NaiveTime> {
        self.parse_bound(&self.auto_stop_cutoff)
    }

    fn parse_bound(&self, s: &str) -> AppResult<NaiveTime> {
        parse_time(s).ok_or_else(|| AppError::Config(format!("invalid time value '{s}'")))
    }
}
