use super::types::ResourceType;
use crate::model::WorkAssignment;
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Overlap test used by every conflict scan. Kept exactly as the
/// production rule: A starts inside [B.start, B.end] (inclusive), or B
/// starts inside [A.start, A.end], or A contains B outright. This is
/// deliberately not the half-open textbook interval test; downstream
/// consumers depend on the inclusive-endpoint behavior.
pub(super) fn assignments_overlap(a: &WorkAssignment, b: &WorkAssignment) -> bool {
    within_interval(a.start, b.start, b.end)
        || within_interval(b.start, a.start, a.end)
        || (a.start <= b.start && a.end >= b.end)
}

fn within_interval(point: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    point >= start && point <= end
}

/// Calendar days the assignment touches, first through last inclusive.
pub(super) fn assignment_days(assignment: &WorkAssignment) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = assignment.start.date_naive();
    let last = assignment.end.date_naive();
    while current <= last {
        days.push(current);
        current = match current.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Hours an assignment charges against one of its days: exact duration
/// when it fits in a single calendar day, a flat 8h otherwise.
pub(super) fn assignment_hours_for_day(assignment: &WorkAssignment) -> i64 {
    if assignment.start.date_naive() == assignment.end.date_naive() {
        assignment.duration_hours()
    } else {
        8
    }
}

/// Resource ids an assignment consumes, for the given dimension.
pub(super) fn assignment_resources(
    assignment: &WorkAssignment,
    resource_type: ResourceType,
) -> Vec<String> {
    match resource_type {
        ResourceType::TradeCrew => vec![assignment.trade_crew_id.as_str().to_string()],
        ResourceType::Volunteer => assignment
            .assigned_volunteers
            .iter()
            .map(|v| v.volunteer_id.as_str().to_string())
            .collect(),
    }
}
