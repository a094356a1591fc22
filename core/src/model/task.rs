use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::entry::{DateKind, OrgDate};
use crate::time::delta_days;

/// One candidate date resolved against a reference instant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolvedDate {
    pub original: OrgDate,
    pub normalized: NaiveDateTime,
    /// Negative when the date is already past.
    pub delta_days: f64,
    pub kind: DateKind,
}

impl ResolvedDate {
    pub fn new(original: OrgDate, kind: DateKind, reference: NaiveDateTime) -> Self {
        let normalized = original.normalized();
        Self {
            original,
            normalized,
            delta_days: delta_days(normalized, reference),
            kind,
        }
    }

    pub fn is_past(&self) -> bool {
        self.delta_days < 0.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub headline: String,
    pub todo: String,
    pub tags: Vec<String>,
    pub priority: Option<char>,
    pub projects: Vec<String>,
    pub due: Option<ResolvedDate>,
    pub all_dates: Vec<ResolvedDate>,
}
