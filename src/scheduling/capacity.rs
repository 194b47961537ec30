use super::types::{CapacityOptions, DateRange, ResourceCapacity, ResourceType};
use super::util;
use crate::model::WorkAssignment;
use chrono::Days;
use std::collections::BTreeMap;

/// Aggregates allocated vs. total hours per (resource, day) over the
/// inclusive range. Rows exist only for resources that appear on a
/// non-cancelled assignment touching that day; resolving display names
/// against a catalog is the caller's job.
pub(super) fn calculate_resource_capacity(
    assignments: &[WorkAssignment],
    resource_type: ResourceType,
    range: &DateRange,
    opts: &CapacityOptions,
) -> Vec<ResourceCapacity> {
    // BTreeMap keyed (resource, date) so output order is stable.
    let mut capacity: BTreeMap<(String, chrono::NaiveDate), ResourceCapacity> = BTreeMap::new();

    // Seed a row for every resource active on each day of the range.
    let mut day = range.start.date_naive();
    let last = range.end.date_naive();
    while day <= last {
        for assignment in assignments {
            if assignment.is_cancelled() {
                continue;
            }
            if !util::assignment_days(assignment).contains(&day) {
                continue;
            }
            for resource_id in util::assignment_resources(assignment, resource_type) {
                let total = opts.daily_hours_for(&resource_id);
                capacity
                    .entry((resource_id.clone(), day))
                    .or_insert_with(|| ResourceCapacity {
                        resource_name: resource_id.clone(),
                        resource_id,
                        resource_type,
                        date: day,
                        total_capacity: total,
                        allocated_capacity: 0,
                        available_capacity: total,
                        overallocation: 0,
                        utilization_percentage: 0,
                    });
            }
        }
        day = match day.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    // Charge every assignment against the rows it overlaps. Days
    // outside the requested range have no row and are skipped.
    for assignment in assignments {
        if assignment.is_cancelled() {
            continue;
        }
        let hours = util::assignment_hours_for_day(assignment);
        for day in util::assignment_days(assignment) {
            for resource_id in util::assignment_resources(assignment, resource_type) {
                if let Some(row) = capacity.get_mut(&(resource_id, day)) {
                    row.allocated_capacity += hours;
                    row.recompute();
                }
            }
        }
    }

    capacity.into_values().collect()
}
