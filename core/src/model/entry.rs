use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::time::end_of_day;

/// A date annotation as written in the outline: either a bare calendar day
/// or a day with a time of day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrgDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl OrgDate {
    /// The fully specified local instant. A bare day ends at 23:59:59.
    pub fn normalized(&self) -> NaiveDateTime {
        match self {
            OrgDate::Date(d) => end_of_day(*d),
            OrgDate::DateTime(dt) => *dt,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            OrgDate::Date(d) => *d,
            OrgDate::DateTime(dt) => dt.date(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            OrgDate::Date(_) => 0,
            OrgDate::DateTime(_) => 1,
        }
    }
}

// Bare days compare by calendar day and timed values by instant. Mixed values
// fall back to the normalized instant, which agrees with both.
impl Ord for OrgDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized()
            .cmp(&other.normalized())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for OrgDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OrgDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrgDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            OrgDate::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// Kinds of date annotation, declared from least to most due-like.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateKind {
    Timestamp,
    Range,
    Scheduled,
    Deadline,
}

impl DateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateKind::Timestamp => "TIMESTAMP",
            DateKind::Range => "RANGE",
            DateKind::Scheduled => "SCHEDULED",
            DateKind::Deadline => "DEADLINE",
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an entry inside an [`Outline`](crate::model::outline::Outline).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// Parser output for one headline. `parent` is an index into the same
/// document's draft list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub level: usize,
    pub headline: String,
    pub todo: Option<String>,
    pub tags: Vec<String>,
    pub priority: Option<char>,
    pub parent: Option<usize>,
    pub timestamps: Vec<OrgDate>,
    pub ranges: Vec<(OrgDate, OrgDate)>,
    pub scheduled: Option<OrgDate>,
    pub deadline: Option<OrgDate>,
}

/// A decorated outline entry. Only reachable through a shared reference
/// once its document has been pushed into an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub level: usize,
    pub headline: String,
    pub todo: Option<String>,
    pub tags: Vec<String>,
    pub filetags: Vec<String>,
    pub priority: Option<char>,
    pub parent: Option<EntryId>,
    pub timestamps: Vec<OrgDate>,
    pub ranges: Vec<(OrgDate, OrgDate)>,
    pub scheduled: Option<OrgDate>,
    pub deadline: Option<OrgDate>,
}

impl Entry {
    pub(crate) fn decorate(draft: EntryDraft, id: EntryId, parent: Option<EntryId>, filetags: &[String]) -> Self {
        Self {
            id,
            level: draft.level,
            headline: draft.headline,
            todo: draft.todo,
            tags: draft.tags,
            filetags: filetags.to_vec(),
            priority: draft.priority,
            parent,
            timestamps: draft.timestamps,
            ranges: draft.ranges,
            scheduled: draft.scheduled,
            deadline: draft.deadline,
        }
    }

    /// Candidate dates per kind, in due-ness order. Ranges contribute their start.
    pub fn date_candidates(&self) -> [(DateKind, Vec<OrgDate>); 4] {
        [
            (DateKind::Timestamp, self.timestamps.clone()),
            (DateKind::Range, self.ranges.iter().map(|(start, _)| *start).collect()),
            (DateKind::Scheduled, self.scheduled.into_iter().collect()),
            (DateKind::Deadline, self.deadline.into_iter().collect()),
        ]
    }
}
