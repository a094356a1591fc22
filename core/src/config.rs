use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_DIR_NAME: &str = ".org2todo";
const DEFAULT_FILE_NAME: &str = "config.json";

/// Every option that gates extraction and ranking.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Recognized todo keywords, in tie-break order.
    pub todos: Vec<String>,
    pub todos_done: Vec<String>,
    pub project_todo: String,
    pub use_filetags_as_projects: bool,
    pub use_short_headlines_as_projects: bool,
    pub use_tags_as_projects: bool,
    pub default_priority: char,
    pub agenda_files: Vec<PathBuf>,
    /// Relative agenda files resolve against this directory.
    pub base: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            todos: ["TODO", "NEXT", "WAITING", "PROJECT", "DONE", "CANCELLED"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            todos_done: vec!["DONE".to_string(), "CANCELLED".to_string()],
            project_todo: "PROJECT".to_string(),
            use_filetags_as_projects: true,
            use_short_headlines_as_projects: true,
            use_tags_as_projects: true,
            default_priority: 'B',
            agenda_files: Vec::new(),
            base: PathBuf::new(),
        }
    }
}

impl Config {
    /// `~/.org2todo/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home_dir.join(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME))
    }

    /// Loads an explicitly named config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default file when it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Self::default_path()?;
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            tracing::debug!(path = %default_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let context = || format!("Failed to write config file {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(context)?;
        }
        let file = File::create(path).with_context(context)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).with_context(context)?;
        writer.flush().with_context(context)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.todos.is_empty() {
            return Err(anyhow!("Config lists no todo keywords"));
        }
        if !self.todos.contains(&self.project_todo) {
            return Err(anyhow!(
                "Project keyword '{}' is not among the todo keywords {:?}",
                self.project_todo,
                self.todos
            ));
        }
        if let Some(done) = self.todos_done.iter().find(|d| !self.todos.contains(*d)) {
            return Err(anyhow!("Done keyword '{}' is not among the todo keywords {:?}", done, self.todos));
        }
        Ok(())
    }

    pub fn is_done(&self, todo: &str) -> bool {
        self.todos_done.iter().any(|d| d == todo)
    }

    pub fn is_project(&self, todo: &str) -> bool {
        self.project_todo == todo
    }

    /// Position in the vocabulary; unknown keywords sort last.
    pub fn todo_rank(&self, todo: &str) -> usize {
        self.todos.iter().position(|t| t == todo).unwrap_or(usize::MAX)
    }

    pub fn resolve(&self, file: &Path) -> PathBuf {
        self.base.join(file)
    }
}
