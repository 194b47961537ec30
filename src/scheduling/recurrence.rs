use super::types::{Frequency, RecurrencePattern};
use crate::model::AssignmentDraft;
use chrono::{DateTime, Datelike, Duration, Utc};

/// Hard ceiling on generated instances when the pattern carries neither
/// an end date nor an occurrence count (one year of weekly entries).
const DEFAULT_MAX_OCCURRENCES: u32 = 52;

/// Expands a recurrence pattern into concrete assignment drafts. The
/// cursor walks day by day from the base start; each matching day emits
/// an instance spanning the base duration in whole days, titled with
/// the occurrence date. The occurrence cap applies unconditionally so
/// an open-ended pattern can never loop forever.
pub(super) fn generate_recurring_assignments(
    base: &AssignmentDraft,
    pattern: &RecurrencePattern,
) -> Vec<AssignmentDraft> {
    let cap = pattern.occurrences.unwrap_or(DEFAULT_MAX_OCCURRENCES);
    // Whole days spanned by the base assignment, from its hour length.
    let duration_days = (base.end - base.start).num_hours() / 24;

    let mut out = Vec::new();
    let mut cursor = base.start;
    let mut emitted = 0u32;

    while emitted < cap && pattern.end_date.map_or(true, |end| cursor <= end) {
        if matches_pattern(cursor, base.start, pattern) {
            let mut instance = base.clone();
            instance.start = cursor;
            instance.end = cursor + Duration::days(duration_days);
            instance.title = format!("{} ({})", base.title, cursor.format("%b %d, %Y"));
            out.push(instance);
            emitted += 1;
        }
        cursor += Duration::days(1);
    }

    out
}

/// Pattern membership for one cursor day.
fn matches_pattern(
    cursor: DateTime<Utc>,
    base_start: DateTime<Utc>,
    pattern: &RecurrencePattern,
) -> bool {
    let interval = i64::from(pattern.interval.max(1));
    let days_since = (cursor.date_naive() - base_start.date_naive()).num_days();

    match pattern.frequency {
        Frequency::Daily => days_since % interval == 0,
        Frequency::Weekly => {
            // An empty day list falls back to the base start's weekday,
            // like an absent one; otherwise no cursor day could ever
            // match and the occurrence cap would never be reached.
            let on_listed_day = match pattern.days_of_week.as_deref() {
                Some(days) if !days.is_empty() => days.contains(&cursor.weekday()),
                _ => cursor.weekday() == base_start.weekday(),
            };
            on_listed_day && (days_since / 7) % interval == 0
        }
        Frequency::Monthly => {
            let months_since = i64::from(cursor.year() - base_start.year()) * 12
                + i64::from(cursor.month() as i32 - base_start.month() as i32);
            cursor.day() == base_start.day() && months_since % interval == 0
        }
    }
}
