#![forbid(unsafe_code)]
//! Crewsched — scheduling core for volunteer construction projects.
//!
//! - Conflict detection across crews, volunteers and skills.
//! - Per-resource per-day capacity aggregation.
//! - Candidate-assignment validation (violations vs. warnings).
//! - Recurrence expansion with a hard occurrence cap.
//! - Category-driven approval workflows with ordered approvers.
//!
//! Pure computation over caller-supplied collections; no persistence,
//! no I/O, no authorization. All timestamps UTC; parsing and local
//! display live outside the crate.

pub mod model;
pub mod scheduling;
pub mod workflow;

pub use model::{
    AssignedVolunteer, AssignmentDraft, AssignmentId, AssignmentStatus, ConfirmationStatus,
    CrewId, Priority, VolunteerId, VolunteerRequirement, WorkAssignment,
};
pub use scheduling::{
    calculate_resource_capacity, detect_conflicts, generate_recurring_assignments,
    suggest_optimal_scheduling, validate_assignment, CapacityOptions, ConflictKind, DateRange,
    Frequency, RecurrencePattern, ResourceCapacity, ResourceType, SchedulingConflict,
    SchedulingSuggestion, Severity, ValidationResult,
};
pub use workflow::{
    advance_workflow, calculate_progress, create_workflow, next_action, process_approval,
    requires_impact_assessment, requires_pre_consultation, validate_workflow,
    AssignmentCategory, AssignmentProfile, AssignmentWorkflow, NextAction, WorkflowError,
    WorkflowValidation,
};
