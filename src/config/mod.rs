use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the workbooks, the history ledger and the log file
    pub data_dir: String,
    /// Directory for generated memo documents; empty = <data_dir>/memos
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Preferred editor for `edit` and `config --edit`; empty = $EDITOR
    #[serde(default = "default_editor")]
    pub editor: String,
    #[serde(default = "default_organization")]
    pub organization: String,
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_through")]
    pub through: String,
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_output_dir() -> String {
    String::new()
}
fn default_editor() -> String {
    String::new()
}
fn default_organization() -> String {
    "MIDWESTERN UMBRELLA OF WATER AND SANITATION".to_string()
}
fn default_recipient() -> String {
    "The Manager, MWUWS".to_string()
}
fn default_through() -> String {
    "The Senior Engineer, MWUWS".to_string()
}
fn default_author() -> String {
    "The Mechanical Engineer, MWUWS".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            output_dir: default_output_dir(),
            editor: default_editor(),
            organization: default_organization(),
            recipient: default_recipient(),
            through: default_through(),
            author: default_author(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fleetrepair")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fleetrepair")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fleetrepair.conf")
    }

    /// Default data directory when the config file names none
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    pub fn data_dir_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn repairs_file(&self) -> PathBuf {
        self.data_dir_path().join("repairs.xlsx")
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir_path().join("repair_history.xlsx")
    }

    pub fn areas_file(&self) -> PathBuf {
        self.data_dir_path().join("areas.xlsx")
    }

    pub fn vehicles_file(&self) -> PathBuf {
        self.data_dir_path().join("vehicles.xlsx")
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir_path().join("fleetrepair.log")
    }

    pub fn memo_dir(&self) -> PathBuf {
        if self.output_dir.trim().is_empty() {
            self.data_dir_path().join("memos")
        } else {
            expand_tilde(&self.output_dir)
        }
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

    /// Initialize the configuration file and the data directory
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data dir: user provided or default
        let data_dir = if let Some(d) = custom_dir {
            expand_tilde(&d)
        } else {
            Self::default_data_dir()
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(())
    }
}
