use chrono::NaiveDateTime;

use crate::config::Config;
use crate::model::task::Task;
use crate::time::far_future;

/// Sort key: priority, then due instant, then keyword position.
pub fn rank_key(task: &Task, config: &Config) -> (char, NaiveDateTime, usize) {
    (
        task.priority.unwrap_or(config.default_priority),
        task.due.as_ref().map(|d| d.normalized).unwrap_or_else(far_future),
        config.todo_rank(&task.todo),
    )
}

/// Stable sort, most urgent first.
pub fn sort_tasks(tasks: &mut [Task], config: &Config) {
    tasks.sort_by_cached_key(|t| rank_key(t, config));
}

/// One todo.txt style line: `(A) headline due:YYYY-MM-DD @tag +project`.
pub fn render_line(task: &Task) -> String {
    let mut parts = Vec::new();
    if let Some(priority) = task.priority {
        parts.push(format!("({})", priority));
    }
    parts.push(task.headline.clone());
    if let Some(due) = &task.due {
        parts.push(format!("due:{}", due.normalized.format("%Y-%m-%d")));
    }
    parts.extend(task.tags.iter().map(|tag| format!("@{}", tag)));
    parts.extend(task.projects.iter().map(|project| format!("+{}", project)));
    parts.join(" ")
}
