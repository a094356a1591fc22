use crate::config::Config;
use crate::model::task::Task;
use crate::repository::OutlineRepository;
use crate::service::dto::TaskDto;
use crate::service::extract::extract_tasks;
use crate::service::rank::{render_line, sort_tasks};
use chrono::NaiveDateTime;
use anyhow::Result;

pub struct TaskService<R: OutlineRepository> {
    repo: R,
    config: Config,
}

impl<R: OutlineRepository> TaskService<R> {
    pub fn new(repo: R, config: Config) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads every document, extracts the actionable entries and ranks them.
    pub fn get_sorted_tasks(&self, now: NaiveDateTime) -> Result<Vec<Task>> {
        let outline = self.repo.load()?;
        let mut tasks = extract_tasks(&outline, &self.config, now);
        sort_tasks(&mut tasks, &self.config);
        tracing::debug!(entries = outline.len(), tasks = tasks.len(), "extracted tasks");
        Ok(tasks)
    }

    pub fn render_lines(&self, now: NaiveDateTime) -> Result<Vec<String>> {
        let tasks = self.get_sorted_tasks(now)?;
        Ok(tasks.iter().map(render_line).collect())
    }

    pub fn export(&self, now: NaiveDateTime) -> Result<Vec<TaskDto>> {
        let tasks = self.get_sorted_tasks(now)?;
        Ok(tasks.into_iter().map(TaskDto::from_entity).collect())
    }
}
