use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::model::outline::Outline;
use crate::parser::{parse_outline, scan_filetags};
use crate::repository::traits::OutlineRepository;

/// Reads org documents from disk.
#[derive(Clone)]
pub struct FileOutlineRepository {
    files: Vec<PathBuf>,
    todos: Vec<String>,
}

impl FileOutlineRepository {
    pub fn new(files: Vec<PathBuf>, todos: Vec<String>) -> Self {
        Self { files, todos }
    }

    /// Uses the configured agenda files, resolved against the base directory.
    pub fn from_config(config: &Config) -> Self {
        let files = config.agenda_files.iter().map(|f| config.resolve(f)).collect();
        Self::new(files, config.todos.clone())
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl OutlineRepository for FileOutlineRepository {
    fn load(&self) -> Result<Outline> {
        let mut outline = Outline::new();

        for path in &self.files {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read outline {}", path.display()))?;
            let filetags = scan_filetags(&text);
            let drafts = parse_outline(&text, &self.todos);
            let count = outline.push_document(drafts, &filetags);
            tracing::debug!(
                path = %path.display(),
                entries = count,
                filetags = filetags.len(),
                "loaded outline"
            );
        }

        Ok(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn todos() -> Vec<String> {
        Config::default().todos
    }

    #[test]
    fn test_load_decorates_per_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("work.org"), "#+FILETAGS: work\n* TODO Report\n** TODO Draft\n").unwrap();
        fs::write(dir.path().join("home.org"), "* TODO Laundry :chore:\n").unwrap();

        let mut config = Config::default();
        config.base = dir.path().to_path_buf();
        config.agenda_files = vec![PathBuf::from("work.org"), PathBuf::from("home.org")];

        let outline = FileOutlineRepository::from_config(&config).load().unwrap();
        let entries: Vec<_> = outline.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].filetags, vec!["work"]);
        assert_eq!(entries[1].filetags, vec!["work"]);
        assert_eq!(outline.parent(entries[1]).unwrap().headline, "Report");
        assert!(entries[2].filetags.is_empty());
        assert_eq!(entries[2].parent, None);
        assert_eq!(entries[2].tags, vec!["chore"]);
    }

    #[test]
    fn test_unreadable_document_is_fatal() {
        let repo = FileOutlineRepository::new(vec![Path::new("/definitely/not/here.org").to_path_buf()], todos());
        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("here.org"));
    }
}
