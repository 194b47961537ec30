//! Scheduling computations over work assignments: conflict scans,
//! capacity aggregation, candidate validation, recurrence expansion.
//! Everything here is a pure function over caller-supplied slices;
//! persistence and scoping of the input set belong to the caller.

mod capacity;
mod conflicts;
mod recurrence;
mod suggest;
mod types;
mod util;
mod validate;

pub use types::{
    CapacityOptions, ConflictKind, DateRange, Frequency, RecurrencePattern, ResourceCapacity,
    ResourceType, SchedulingConflict, SchedulingSuggestion, Severity, ValidationResult,
};

use crate::model::{AssignmentDraft, WorkAssignment};
use chrono::{DateTime, Utc};

/// Hours a resource can supply per day when nothing else is known.
pub const DEFAULT_DAILY_HOURS: i64 = 8;

/// Runs all conflict scans over the given assignments. Cancelled
/// assignments are skipped; everything else is scanned pairwise per
/// crew and per volunteer, then per-assignment for skill coverage.
pub fn detect_conflicts(assignments: &[WorkAssignment]) -> Vec<SchedulingConflict> {
    conflicts::detect_conflicts(assignments)
}

/// Computes per-resource per-day utilization over an inclusive range.
pub fn calculate_resource_capacity(
    assignments: &[WorkAssignment],
    resource_type: ResourceType,
    range: &DateRange,
    opts: &CapacityOptions,
) -> Vec<ResourceCapacity> {
    capacity::calculate_resource_capacity(assignments, resource_type, range, opts)
}

/// Validates a candidate assignment against the existing schedule.
/// `now` anchors the "scheduled in the past" check.
pub fn validate_assignment(
    candidate: &WorkAssignment,
    existing: &[WorkAssignment],
    now: DateTime<Utc>,
) -> ValidationResult {
    validate::validate_assignment(candidate, existing, now)
}

/// Previews the conflicts and crew-capacity impact of committing a
/// candidate assignment, without touching the existing set.
pub fn suggest_optimal_scheduling(
    candidate: &AssignmentDraft,
    existing: &[WorkAssignment],
    opts: &CapacityOptions,
) -> SchedulingSuggestion {
    suggest::suggest_optimal_scheduling(candidate, existing, opts)
}

/// Expands a recurrence pattern into dated assignment drafts.
pub fn generate_recurring_assignments(
    base: &AssignmentDraft,
    pattern: &RecurrencePattern,
) -> Vec<AssignmentDraft> {
    recurrence::generate_recurring_assignments(base, pattern)
}
