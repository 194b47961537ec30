//! Category-driven approval workflows: step assembly, approver chains,
//! and the transitions that move a workflow from initial review to
//! final confirmation. Transitions mutate the workflow they are given;
//! the caller persists it as one transactional unit.

mod builder;
mod engine;
mod types;

pub use types::{
    ApprovalLevel, ApprovalStatus, AssignmentCategory, AssignmentProfile, AssignmentWorkflow,
    ImpactLevel, NextAction, PreConsultation, StepId, StepStatus, WorkflowApprover, WorkflowError,
    WorkflowStep, WorkflowValidation,
};

use chrono::{DateTime, Utc};

/// Builds a new workflow for the assignment, positioned on its first
/// step.
pub fn create_workflow(profile: &AssignmentProfile, now: DateTime<Utc>) -> AssignmentWorkflow {
    builder::create_workflow(profile, now)
}

/// True when the assignment should be preceded by a consultation round.
pub fn requires_pre_consultation(profile: &AssignmentProfile) -> bool {
    builder::requires_pre_consultation(profile)
}

/// True when an impact assessment should be prepared for the assignment.
pub fn requires_impact_assessment(profile: &AssignmentProfile) -> bool {
    builder::requires_impact_assessment(profile)
}

/// Completes a step and moves the workflow forward.
pub fn advance_workflow(
    workflow: &mut AssignmentWorkflow,
    step_id: &StepId,
    completed_by: &str,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    engine::advance_workflow(workflow, step_id, completed_by, notes, now)
}

/// Records an approver's decision, auto-advancing once every approver
/// has approved.
pub fn process_approval(
    workflow: &mut AssignmentWorkflow,
    approver_user_id: &str,
    approved: bool,
    comments: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    engine::process_approval(workflow, approver_user_id, approved, comments, now)
}

/// Appends a pre-consultation record to the workflow log.
pub fn record_consultation(
    workflow: &mut AssignmentWorkflow,
    consultation: PreConsultation,
    now: DateTime<Utc>,
) {
    engine::record_consultation(workflow, consultation, now)
}

/// Completion percentage over all steps.
pub fn calculate_progress(workflow: &AssignmentWorkflow) -> u32 {
    engine::calculate_progress(workflow)
}

/// The next human action required to move the workflow along.
pub fn next_action(workflow: &AssignmentWorkflow) -> NextAction {
    engine::next_action(workflow)
}

/// Structural sanity check over step ordering, completion documents and
/// approver uniqueness. Never mutates.
pub fn validate_workflow(workflow: &AssignmentWorkflow) -> WorkflowValidation {
    engine::validate_workflow(workflow)
}
