use chrono::NaiveDateTime;

use crate::model::entry::{DateKind, OrgDate};
use crate::model::task::ResolvedDate;

/// Picks the nearest upcoming date, or the latest one when every candidate
/// is already past. `None` only for an empty candidate list.
pub fn closest(dates: &[OrgDate], kind: DateKind, reference: NaiveDateTime) -> Option<ResolvedDate> {
    let mut sorted = dates.to_vec();
    sorted.sort();

    let mut chosen = None;
    for date in sorted {
        let resolved = ResolvedDate::new(date, kind, reference);
        let upcoming = !resolved.is_past();
        chosen = Some(resolved);
        if upcoming {
            break;
        }
    }
    chosen
}
