use super::conflicts;
use super::types::{Severity, ValidationResult};
use crate::model::WorkAssignment;
use chrono::{DateTime, Utc};

/// Checks a candidate assignment against business rules and the
/// existing schedule. Violations block the commit; warnings are
/// advisory. Pure: inputs are never mutated, and `now` is supplied by
/// the caller rather than read from a clock.
pub(super) fn validate_assignment(
    candidate: &WorkAssignment,
    existing: &[WorkAssignment],
    now: DateTime<Utc>,
) -> ValidationResult {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    if candidate.start >= candidate.end {
        violations.push("End date must be after start date".to_string());
    }

    if candidate.start < now {
        warnings.push("Assignment is scheduled in the past".to_string());
    }

    let required: u32 = candidate
        .required_volunteers
        .iter()
        .map(|req| req.quantity)
        .sum();
    let assigned = candidate.assigned_volunteers.len() as u32;
    if assigned < required {
        warnings.push(format!(
            "Insufficient volunteers assigned: {assigned}/{required}"
        ));
    }

    let assigned_skills: Vec<&String> = candidate
        .assigned_volunteers
        .iter()
        .flat_map(|v| v.skills.iter())
        .collect();
    let missing: Vec<&str> = candidate
        .required_volunteers
        .iter()
        .map(|req| req.skill.as_str())
        .filter(|skill| !assigned_skills.iter().any(|s| s.as_str() == *skill))
        .collect();
    if !missing.is_empty() {
        warnings.push(format!("Missing required skills: {}", missing.join(", ")));
    }

    // Merge the candidate into the existing set for the conflict scan.
    let mut merged: Vec<WorkAssignment> = existing.to_vec();
    merged.push(candidate.clone());
    let critical = conflicts::detect_conflicts(&merged)
        .iter()
        .filter(|c| c.severity == Severity::Critical)
        .count();
    if critical > 0 {
        violations.push(format!(
            "Critical scheduling conflicts detected: {critical}"
        ));
    }

    ValidationResult {
        is_valid: violations.is_empty(),
        violations,
        warnings,
    }
}
