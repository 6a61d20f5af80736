//! Configuration loading for tasktrack.
//!
//! Supports tasktrack.toml, CLI flags, and environment variables.
//! Precedence (highest to lowest): CLI flags > env vars > config file >
//! defaults. The only real knob is the path of the backing file.

use std::fs;
use std::path::Path;

/// Environment variable overriding the backing file path.
pub const TASKS_FILE_ENV: &str = "TASKTRACK_TASKS_FILE";

/// Default backing file, relative to the working directory.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tasktrack.toml";

/// Tasktrack subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all tasks.
    List,
    /// Add a new task.
    Add,
    /// Mark a task complete.
    Done,
    /// Mark a task pending again.
    Reopen,
    /// Flip a task between pending and complete.
    Toggle,
    /// Remove a task.
    Remove,
    /// Set a task's due date.
    Due,
    /// Replace a task's title.
    Retitle,
    /// List tasks with a given status.
    Status,
    /// List tasks in priority order.
    Sort,
}

impl Command {
    /// Parse command from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            "done" => Some(Self::Done),
            "reopen" => Some(Self::Reopen),
            "toggle" => Some(Self::Toggle),
            "remove" => Some(Self::Remove),
            "due" => Some(Self::Due),
            "retitle" => Some(Self::Retitle),
            "status" => Some(Self::Status),
            "sort" => Some(Self::Sort),
            _ => None,
        }
    }
}

/// CLI arguments parsed from command line.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Subcommand to execute.
    pub command: Option<Command>,
    /// Path to config file.
    pub config: Option<String>,
    /// Path to the backing tasks file.
    pub tasks_file: Option<String>,
    /// Description for `add`.
    pub description: Option<String>,
    /// Due date for `add`.
    pub due: Option<String>,
    /// Positional arguments after the subcommand (id, title, date, status).
    pub positional: Vec<String>,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-c" | "--config" => cli.config = args.next(),
            "-f" | "--file" => cli.tasks_file = args.next(),
            "--desc" => cli.description = args.next(),
            "--due" => cli.due = args.next(),
            _ if !arg.starts_with('-') => {
                if cli.command.is_none() {
                    cli.command = Command::from_str(&arg);
                } else {
                    cli.positional.push(arg);
                }
            }
            _ => {} // Ignore unknown flags
        }
    }

    cli
}

/// Tasktrack configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the backing tasks file.
    pub tasks_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: DEFAULT_TASKS_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    pub fn load(cli_args: &CliArgs) -> Self {
        let mut config = Self::default();

        // Load from config file if present
        if let Some(ref path) = cli_args.config {
            if let Ok(file_config) = Self::load_from_file(path) {
                config = file_config;
            }
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            if let Ok(file_config) = Self::load_from_file(DEFAULT_CONFIG_FILE) {
                config = file_config;
            }
        }

        // Apply environment variables
        if let Ok(path) = std::env::var(TASKS_FILE_ENV) {
            if !path.is_empty() {
                config.tasks_file = path;
            }
        }

        // Apply CLI args (highest precedence)
        if let Some(ref path) = cli_args.tasks_file {
            config.tasks_file = path.clone();
        }

        config
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse TOML content into configuration.
    pub(crate) fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Handle section headers like [files]
            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].to_string();
                continue;
            }

            if let Some((key, value)) = parse_toml_line(line) {
                let full_key = if current_section.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", current_section, key)
                };

                match full_key.as_str() {
                    "files.tasks" => {
                        let path = value.trim_matches('"');
                        if path.is_empty() {
                            return Err(ConfigError::Parse(format!(
                                "invalid files.tasks: {}",
                                value
                            )));
                        }
                        config.tasks_file = path.to_string();
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        Ok(config)
    }
}

/// Parse a TOML line into key-value pair.
fn parse_toml_line(line: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = line.splitn(2, '=').collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].trim(), parts[1].trim()))
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading config file.
    Io(String),
    /// Parse error in config file.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
