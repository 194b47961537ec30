use super::types::{ConflictKind, SchedulingConflict, Severity};
use super::util;
use crate::model::WorkAssignment;

/// Runs the four conflict scans and concatenates their findings, in a
/// fixed order: crew double-booking, volunteer overlap, capacity,
/// skill shortfall. Scans are independent; the same assignment pair
/// may surface more than once.
pub(super) fn detect_conflicts(assignments: &[WorkAssignment]) -> Vec<SchedulingConflict> {
    #[cfg(feature = "logging")]
    tracing::debug!(count = assignments.len(), "running conflict scans");

    let mut out = Vec::new();
    out.extend(detect_resource_conflicts(assignments));
    out.extend(detect_volunteer_conflicts(assignments));
    out.extend(detect_capacity_conflicts(assignments));
    out.extend(detect_skill_mismatches(assignments));
    out
}

/// Two non-cancelled assignments booked on the same trade crew over
/// overlapping dates.
fn detect_resource_conflicts(assignments: &[WorkAssignment]) -> Vec<SchedulingConflict> {
    let mut conflicts = Vec::new();
    let mut groups: Vec<(&str, Vec<&WorkAssignment>)> = Vec::new();

    for assignment in assignments {
        if assignment.is_cancelled() {
            continue;
        }
        let crew = assignment.trade_crew_id.as_str();
        match groups.iter_mut().find(|(id, _)| *id == crew) {
            Some((_, members)) => members.push(assignment),
            None => groups.push((crew, vec![assignment])),
        }
    }

    for (crew_id, members) in &groups {
        for (i, a) in members.iter().enumerate() {
            for b in members.iter().skip(i + 1) {
                if util::assignments_overlap(a, b) {
                    conflicts.push(SchedulingConflict {
                        id: SchedulingConflict::generate_id(),
                        kind: ConflictKind::ResourceDoubleBooking,
                        severity: Severity::High,
                        description: format!("Trade crew {crew_id} double-booked"),
                        affected_assignments: vec![a.id.clone(), b.id.clone()],
                        affected_resources: vec![crew_id.to_string()],
                        suggested_resolution: "Reschedule one of the conflicting assignments"
                            .to_string(),
                    });
                }
            }
        }
    }

    conflicts
}

/// One volunteer placed on overlapping assignments. An assignment joins
/// the group of every volunteer it lists.
fn detect_volunteer_conflicts(assignments: &[WorkAssignment]) -> Vec<SchedulingConflict> {
    let mut conflicts = Vec::new();
    let mut groups: Vec<(&str, Vec<&WorkAssignment>)> = Vec::new();

    for assignment in assignments {
        if assignment.is_cancelled() {
            continue;
        }
        for volunteer in &assignment.assigned_volunteers {
            let vid = volunteer.volunteer_id.as_str();
            match groups.iter_mut().find(|(id, _)| *id == vid) {
                Some((_, members)) => members.push(assignment),
                None => groups.push((vid, vec![assignment])),
            }
        }
    }

    for (volunteer_id, members) in &groups {
        for (i, a) in members.iter().enumerate() {
            for b in members.iter().skip(i + 1) {
                if util::assignments_overlap(a, b) {
                    conflicts.push(SchedulingConflict {
                        id: SchedulingConflict::generate_id(),
                        kind: ConflictKind::VolunteerUnavailable,
                        severity: Severity::Medium,
                        description: format!(
                            "Volunteer {volunteer_id} assigned to overlapping assignments"
                        ),
                        affected_assignments: vec![a.id.clone(), b.id.clone()],
                        affected_resources: vec![volunteer_id.to_string()],
                        suggested_resolution: "Remove volunteer from one assignment or reschedule"
                            .to_string(),
                    });
                }
            }
        }
    }

    conflicts
}

/// Reserved extension point: the production behavior reports no
/// capacity conflicts from this scan. Callers wanting capacity alerts
/// read `overallocation` off `calculate_resource_capacity` rows.
fn detect_capacity_conflicts(_assignments: &[WorkAssignment]) -> Vec<SchedulingConflict> {
    Vec::new()
}

/// Non-optional skill requirements covered by fewer volunteers than the
/// required quantity.
fn detect_skill_mismatches(assignments: &[WorkAssignment]) -> Vec<SchedulingConflict> {
    let mut conflicts = Vec::new();

    for assignment in assignments {
        if assignment.is_cancelled() {
            continue;
        }
        for requirement in &assignment.required_volunteers {
            let matching = assignment
                .assigned_volunteers
                .iter()
                .filter(|v| v.skills.iter().any(|s| s == &requirement.skill))
                .count() as u32;

            if matching < requirement.quantity && !requirement.is_optional {
                let shortfall = requirement.quantity - matching;
                conflicts.push(SchedulingConflict {
                    id: SchedulingConflict::generate_id(),
                    kind: ConflictKind::SkillMismatch,
                    severity: Severity::Medium,
                    description: format!(
                        "Insufficient volunteers with {} skill",
                        requirement.skill
                    ),
                    affected_assignments: vec![assignment.id.clone()],
                    affected_resources: Vec::new(),
                    suggested_resolution: format!(
                        "Assign {shortfall} more volunteers with {} skill",
                        requirement.skill
                    ),
                });
            }
        }
    }

    conflicts
}
