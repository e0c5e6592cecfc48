use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocVersionsError, Result};
use crate::switcher::{Markers, DEFAULT_END_MARKER, DEFAULT_START_MARKER};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "docversions.toml";

/// Represents the complete configuration for doc-versions.
///
/// Contains the documentation layout used by `index` and `link`, and the
/// file selection used by the whitespace linter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub whitespace: WhitespaceConfig,
}

/// Returns the default set of directory names that are never versions.
fn default_ignored() -> Vec<String> {
    vec![
        "master".to_string(),
        "stable".to_string(),
        "latest".to_string(),
    ]
}

fn default_docs_root() -> PathBuf {
    PathBuf::from("docs")
}

fn default_switcher_file() -> String {
    "version_switcher.js".to_string()
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

/// Documentation site layout.
///
/// `root` is resolved relative to the working directory; `switcher_file` is
/// resolved relative to `root`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocsConfig {
    #[serde(default = "default_docs_root")]
    pub root: PathBuf,

    #[serde(default = "default_ignored")]
    pub ignored: Vec<String>,

    #[serde(default = "default_switcher_file")]
    pub switcher_file: String,

    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

impl DocsConfig {
    pub fn markers(&self) -> Markers {
        Markers {
            start: self.start_marker.clone(),
            end: self.end_marker.clone(),
        }
    }

    pub fn switcher_path(&self) -> PathBuf {
        self.root.join(&self.switcher_file)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.iter().any(|ignored| ignored == name)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            root: default_docs_root(),
            ignored: default_ignored(),
            switcher_file: default_switcher_file(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
        }
    }
}

/// Returns the default file endings checked by the whitespace linter.
fn default_extensions() -> Vec<String> {
    [
        ".py",
        ".pyx",
        ".pyi",
        ".c",
        ".cpp",
        ".cxx",
        ".hpp",
        ".hxx",
        ".h",
        ".yml",
        ".yaml",
        ".html",
        ".htm",
        ".js",
        ".json",
        ".toml",
        ".ini",
        ".cfg",
        ".css",
        ".md",
        ".dockerfile",
        "Dockerfile",
        ".editorconfig",
        ".gitattributes",
        ".gitignore",
        ".dockerignore",
        ".flake8",
        ".txt",
        ".sh",
        ".bat",
        ".ps1",
        ".rb",
        ".pl",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

/// Returns the default directories walked by the whitespace linter.
fn default_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(".github"),
        PathBuf::from("docs"),
        PathBuf::from("scripts"),
    ]
}

fn default_skip_dirs() -> Vec<String> {
    vec!["__pycache__".to_string()]
}

fn default_stage() -> bool {
    true
}

/// Configuration for the trailing whitespace linter.
///
/// Regular files directly in the project root that match `extensions` are
/// always checked in addition to `paths`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WhitespaceConfig {
    #[serde(default = "default_paths")]
    pub paths: Vec<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Stage fixed files in git
    #[serde(default = "default_stage")]
    pub stage: bool,
}

impl WhitespaceConfig {
    /// Whether a file name ends with one of the configured endings, ignoring case
    pub fn matches_file_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&ext.to_lowercase()))
    }
}

impl Default for WhitespaceConfig {
    fn default() -> Self {
        WhitespaceConfig {
            paths: default_paths(),
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
            stage: default_stage(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docversions.toml` in current directory
/// 3. `.docversions.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        DocVersionsError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| DocVersionsError::config(format!("{} ({})", e, path.display())))
}

/// Parses a TOML configuration string, filling omitted keys with defaults
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}
