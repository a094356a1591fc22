//! Org-style outline parsing.
//!
//! Turns document text into [`EntryDraft`]s with document-local parent
//! indices. Filetags are read separately by [`filetags::scan_filetags`] and
//! attached when the drafts are pushed into an outline.

pub mod filetags;
pub mod timestamp;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::entry::EntryDraft;
use timestamp::{parse_active, scan_line};

pub use filetags::scan_filetags;

static HEADLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\*+)\s+(.*)$").expect("valid headline regex"));
static TAGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)(?:^|\s+)(:(?:[^\s:]+:)+)\s*$").expect("valid tags regex"));
static PRIORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[#([A-Za-z0-9])\]\s*").expect("valid priority regex"));
static SCHEDULED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SCHEDULED:\s*(<[^<>]*>)").expect("valid scheduled regex"));
static DEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"DEADLINE:\s*(<[^<>]*>)").expect("valid deadline regex"));

const PLANNING_KEYWORDS: [&str; 3] = ["SCHEDULED:", "DEADLINE:", "CLOSED:"];

/// Parses one document. `todos` is the full keyword vocabulary; a first word
/// outside it is part of the headline.
pub fn parse_outline(text: &str, todos: &[String]) -> Vec<EntryDraft> {
    let mut drafts: Vec<EntryDraft> = Vec::new();
    // (level, index) of the open headlines, outermost first
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut in_drawer = false;

    for line in text.lines() {
        if let Some(caps) = HEADLINE_RE.captures(line) {
            let level = caps[1].len();
            while stack.last().is_some_and(|(l, _)| *l >= level) {
                stack.pop();
            }

            let mut draft = parse_headline(&caps[2], todos);
            draft.level = level;
            draft.parent = stack.last().map(|(_, index)| *index);
            let dates = scan_line(&caps[2]);
            draft.timestamps = dates.timestamps;
            draft.ranges = dates.ranges;

            stack.push((level, drafts.len()));
            drafts.push(draft);
            in_drawer = false;
            continue;
        }

        let Some(current) = drafts.last_mut() else {
            continue;
        };

        let trimmed = line.trim();
        if in_drawer {
            if trimmed.eq_ignore_ascii_case(":END:") {
                in_drawer = false;
            }
            continue;
        }
        if trimmed.eq_ignore_ascii_case(":PROPERTIES:") || trimmed.eq_ignore_ascii_case(":LOGBOOK:") {
            in_drawer = true;
            continue;
        }

        if PLANNING_KEYWORDS.iter().any(|k| line.contains(k)) {
            read_planning(line, current);
            continue;
        }

        let dates = scan_line(line);
        current.timestamps.extend(dates.timestamps);
        current.ranges.extend(dates.ranges);
    }

    drafts
}

fn parse_headline(rest: &str, todos: &[String]) -> EntryDraft {
    let mut draft = EntryDraft::default();

    let mut text = rest.trim_end();
    if let Some(caps) = TAGS_RE.captures(text) {
        if let (Some(head), Some(tags)) = (caps.get(1), caps.get(2)) {
            draft.tags = tags
                .as_str()
                .split(':')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            text = head.as_str();
        }
    }

    let mut text = text.trim_start();
    let first = text.split_whitespace().next().unwrap_or("");
    if !first.is_empty() && todos.iter().any(|t| t == first) {
        draft.todo = Some(first.to_string());
        text = text[first.len()..].trim_start();
    }

    if let Some(caps) = PRIORITY_RE.captures(text) {
        draft.priority = caps[1].chars().next();
        let consumed = caps.get(0).map_or(0, |m| m.end());
        text = &text[consumed..];
    }

    draft.headline = text.trim().to_string();
    draft
}

fn read_planning(line: &str, draft: &mut EntryDraft) {
    if draft.scheduled.is_none() {
        draft.scheduled = SCHEDULED_RE.captures(line).and_then(|c| parse_active(&c[1]));
    }
    if draft.deadline.is_none() {
        draft.deadline = DEADLINE_RE.captures(line).and_then(|c| parse_active(&c[1]));
    }
}
