use chrono::NaiveDateTime;

use crate::config::Config;
use crate::model::entry::Entry;
use crate::model::outline::Outline;
use crate::model::task::Task;
use crate::service::resolve::closest;

/// Builds one task per actionable entry, in encounter order.
pub fn extract_tasks(outline: &Outline, config: &Config, now: NaiveDateTime) -> Vec<Task> {
    outline
        .iter()
        .filter_map(|entry| extract_task(outline, entry, config, now))
        .collect()
}

pub fn extract_task(outline: &Outline, entry: &Entry, config: &Config, now: NaiveDateTime) -> Option<Task> {
    let todo = entry.todo.as_deref()?;
    if config.is_done(todo) || config.is_project(todo) {
        return None;
    }

    let mut task = Task {
        headline: entry.headline.clone(),
        todo: todo.to_string(),
        tags: entry.tags.clone(),
        priority: entry.priority,
        projects: inherited_projects(outline, entry, config),
        due: None,
        all_dates: Vec::new(),
    };

    // Later kinds are more due-like; the last one present becomes `due`.
    for (kind, dates) in entry.date_candidates() {
        if let Some(resolved) = closest(&dates, kind, now) {
            task.due = Some(resolved.clone());
            task.all_dates.push(resolved);
        }
    }

    Some(task)
}

/// Filetags first, then every project ancestor from the nearest upwards.
/// Non-project ancestors are passed over, not a stopping point.
pub fn inherited_projects(outline: &Outline, entry: &Entry, config: &Config) -> Vec<String> {
    let mut projects = if config.use_filetags_as_projects {
        entry.filetags.clone()
    } else {
        Vec::new()
    };

    for ancestor in outline.ancestors(entry) {
        if !ancestor.todo.as_deref().is_some_and(|t| config.is_project(t)) {
            continue;
        }
        if config.use_short_headlines_as_projects && !ancestor.headline.contains(char::is_whitespace) {
            projects.push(ancestor.headline.clone());
        }
        if config.use_tags_as_projects {
            projects.extend(ancestor.tags.iter().cloned());
        }
    }

    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{DateKind, EntryDraft, OrgDate};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> OrgDate {
        OrgDate::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn entry(todo: Option<&str>, headline: &str, parent: Option<usize>) -> EntryDraft {
        EntryDraft {
            headline: headline.to_string(),
            todo: todo.map(str::to_string),
            parent,
            ..Default::default()
        }
    }

    fn outline_of(drafts: Vec<EntryDraft>, filetags: &[&str]) -> Outline {
        let filetags: Vec<String> = filetags.iter().map(|s| s.to_string()).collect();
        let mut outline = Outline::new();
        outline.push_document(drafts, &filetags);
        outline
    }

    #[test]
    fn test_filters_non_actionable() {
        let outline = outline_of(
            vec![
                entry(None, "Notes", None),
                entry(Some("DONE"), "Finished", None),
                entry(Some("CANCELLED"), "Dropped", None),
                entry(Some("PROJECT"), "Garden", None),
                entry(Some("TODO"), "Water", Some(3)),
                entry(Some("WAITING"), "Reply", None),
            ],
            &[],
        );

        let tasks = extract_tasks(&outline, &Config::default(), now());
        let names: Vec<&str> = tasks.iter().map(|t| t.headline.as_str()).collect();
        assert_eq!(names, vec!["Water", "Reply"]);
    }

    #[test]
    fn test_deadline_beats_closer_scheduled() {
        let mut draft = entry(Some("TODO"), "Taxes", None);
        draft.scheduled = Some(day(2024, 6, 16));
        draft.deadline = Some(day(2024, 9, 30));
        draft.timestamps = vec![day(2024, 6, 15)];
        let outline = outline_of(vec![draft], &[]);

        let task = &extract_tasks(&outline, &Config::default(), now())[0];
        let due = task.due.as_ref().unwrap();
        assert_eq!(due.kind, DateKind::Deadline);
        assert_eq!(due.original, day(2024, 9, 30));
        let kinds: Vec<DateKind> = task.all_dates.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DateKind::Timestamp, DateKind::Scheduled, DateKind::Deadline]);
    }

    #[test]
    fn test_range_start_resolves() {
        let mut draft = entry(Some("TODO"), "Conference", None);
        draft.ranges = vec![(day(2024, 6, 10), day(2024, 6, 20)), (day(2024, 7, 1), day(2024, 7, 3))];
        let outline = outline_of(vec![draft], &[]);

        let task = &extract_tasks(&outline, &Config::default(), now())[0];
        let due = task.due.as_ref().unwrap();
        assert_eq!(due.kind, DateKind::Range);
        assert_eq!(due.original, day(2024, 7, 1));
    }

    #[test]
    fn test_no_dates_means_no_due() {
        let outline = outline_of(vec![entry(Some("TODO"), "Someday", None)], &[]);
        let task = &extract_tasks(&outline, &Config::default(), now())[0];
        assert!(task.due.is_none());
        assert!(task.all_dates.is_empty());
    }

    #[test]
    fn test_projects_from_ancestors() {
        let mut garden = entry(Some("PROJECT"), "Garden", None);
        garden.tags = vec!["outdoor".to_string(), "home".to_string()];
        let mut big = entry(Some("PROJECT"), "Big renovation", Some(0));
        big.tags = vec!["reno".to_string()];
        let outline = outline_of(
            vec![
                garden,
                big,
                entry(None, "Phase one", Some(1)),
                entry(Some("TODO"), "Paint fence", Some(2)),
            ],
            &["house"],
        );

        let task = &extract_tasks(&outline, &Config::default(), now())[0];
        assert_eq!(task.projects, vec!["house", "reno", "Garden", "outdoor", "home"]);
    }

    #[test]
    fn test_project_switches() {
        let mut garden = entry(Some("PROJECT"), "Garden", None);
        garden.tags = vec!["outdoor".to_string()];
        let outline = outline_of(vec![garden, entry(Some("TODO"), "Water plants", Some(0))], &["work"]);

        let mut config = Config::default();
        config.use_short_headlines_as_projects = false;
        config.use_filetags_as_projects = false;
        let task = &extract_tasks(&outline, &config, now())[0];
        assert_eq!(task.projects, vec!["outdoor"]);

        config.use_short_headlines_as_projects = true;
        config.use_tags_as_projects = false;
        let task = &extract_tasks(&outline, &config, now())[0];
        assert_eq!(task.projects, vec!["Garden"]);
    }

    #[test]
    fn test_duplicate_projects_are_kept() {
        let mut garden = entry(Some("PROJECT"), "Garden", None);
        garden.tags = vec!["work".to_string()];
        let outline = outline_of(vec![garden, entry(Some("TODO"), "Weed", Some(0))], &["work"]);

        let task = &extract_tasks(&outline, &Config::default(), now())[0];
        assert_eq!(task.projects, vec!["work", "Garden", "work"]);
    }
}
