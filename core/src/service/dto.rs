use serde::{Deserialize, Serialize};

use crate::model::task::{ResolvedDate, Task};

const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DateDto {
    pub kind: String,
    pub original: String,
    pub normalized: String,
    pub delta_days: f64,
}

impl DateDto {
    pub fn from_resolved(date: &ResolvedDate) -> Self {
        Self {
            kind: date.kind.to_string(),
            original: date.original.to_string(),
            normalized: date.normalized.format(INSTANT_FORMAT).to_string(),
            delta_days: date.delta_days,
        }
    }
}

/// Flattened task for JSON export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    pub headline: String,
    pub todo: String,
    pub priority: Option<String>,
    pub tags: Vec<String>,
    pub projects: Vec<String>,
    pub due: Option<String>,
    pub due_kind: Option<String>,
    pub delta_days: Option<f64>,
    pub dates: Vec<DateDto>,
}

impl TaskDto {
    pub fn from_entity(task: Task) -> Self {
        let due = task.due.as_ref().map(DateDto::from_resolved);
        Self {
            headline: task.headline,
            todo: task.todo,
            priority: task.priority.map(|p| p.to_string()),
            tags: task.tags,
            projects: task.projects,
            due: due.as_ref().map(|d| d.normalized.clone()),
            due_kind: due.as_ref().map(|d| d.kind.clone()),
            delta_days: due.as_ref().map(|d| d.delta_days),
            dates: task.all_dates.iter().map(DateDto::from_resolved).collect(),
        }
    }
}
