use super::types::{CapacityOptions, DateRange, ResourceType, SchedulingSuggestion};
use super::{capacity, conflicts};
use crate::model::{AssignmentDraft, WorkAssignment};

/// Previews the effect of committing a candidate assignment: merges it
/// into the existing set, then reports the conflicts it would raise and
/// its crew-capacity footprint over its own date window. The candidate
/// start is echoed as the suggested placement; smarter date search is
/// left to callers with knowledge of resource calendars.
pub(super) fn suggest_optimal_scheduling(
    candidate: &AssignmentDraft,
    existing: &[WorkAssignment],
    opts: &CapacityOptions,
) -> SchedulingSuggestion {
    let mut merged: Vec<WorkAssignment> = existing.to_vec();
    merged.push(candidate.clone().into_assignment());

    let potential_conflicts = conflicts::detect_conflicts(&merged);
    let capacity_impact = capacity::calculate_resource_capacity(
        &merged,
        ResourceType::TradeCrew,
        &DateRange {
            start: candidate.start,
            end: candidate.end,
        },
        opts,
    );

    SchedulingSuggestion {
        suggested_dates: vec![candidate.start],
        potential_conflicts,
        capacity_impact,
    }
}
