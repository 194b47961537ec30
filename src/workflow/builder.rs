use super::types::{
    ApprovalLevel, AssignmentCategory, AssignmentProfile, AssignmentWorkflow, WorkflowApprover,
    WorkflowStep,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Builds the workflow for an assignment: the ordered step list and the
/// approver chain its category requires. The first step becomes the
/// current step.
pub(super) fn create_workflow(
    profile: &AssignmentProfile,
    now: DateTime<Utc>,
) -> AssignmentWorkflow {
    let steps = build_steps(profile);
    let approvers = build_approvers(profile);

    #[cfg(feature = "logging")]
    tracing::debug!(
        assignment = profile.assignment_id.as_str(),
        steps = steps.len(),
        approvers = approvers.len(),
        "workflow created"
    );

    AssignmentWorkflow {
        id: Uuid::new_v4().to_string(),
        assignment_id: profile.assignment_id.clone(),
        steps,
        current_step: 0,
        approvers,
        consultations: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

/// Step assembly order is fixed: initial review, then the conditional
/// consultation/impact steps, the category's approval step, and a final
/// confirmation. Orders are assigned 1-based once the list is complete.
fn build_steps(profile: &AssignmentProfile) -> Vec<WorkflowStep> {
    let mut steps = vec![WorkflowStep::pending(
        "Initial Review",
        "Review assignment details and requirements",
        &[],
    )];

    if profile.category == AssignmentCategory::BranchAppointed {
        steps.push(WorkflowStep::pending(
            "Pre-Consultation",
            "Consult with affected parties before assignment",
            &["consultation_notes"],
        ));
    }

    if profile.priority.is_elevated() {
        steps.push(WorkflowStep::pending(
            "Impact Assessment",
            "Assess impact on other roles and projects",
            &["impact_assessment"],
        ));
    }

    if let Some(approval) = approval_step(profile.category) {
        steps.push(approval);
    }

    steps.push(WorkflowStep::pending(
        "Final Confirmation",
        "Confirm assignment details and send written confirmation",
        &["written_confirmation"],
    ));

    for (idx, step) in steps.iter_mut().enumerate() {
        step.order = idx as u32 + 1;
    }
    steps
}

fn approval_step(category: AssignmentCategory) -> Option<WorkflowStep> {
    match category {
        AssignmentCategory::BranchAppointed => Some(WorkflowStep::pending(
            "Branch Approval",
            "Branch committee approval required for branch-appointed assignments",
            &["branch_approval_form"],
        )),
        AssignmentCategory::FieldAssigned => Some(WorkflowStep::pending(
            "Overseer Approval",
            "Field overseer approval for field assignments",
            &["overseer_approval"],
        )),
        AssignmentCategory::Emergency => Some(WorkflowStep::pending(
            "Emergency Approval",
            "Expedited approval for emergency assignments",
            &["emergency_justification"],
        )),
        AssignmentCategory::SpecialProject => Some(WorkflowStep::pending(
            "Zone Approval",
            "Zone oversight approval for special projects",
            &["zone_approval_form"],
        )),
        AssignmentCategory::Temporary | AssignmentCategory::Training => None,
    }
}

/// One approver per matching category; other categories gate on steps
/// alone and produce no approver.
fn build_approvers(profile: &AssignmentProfile) -> Vec<WorkflowApprover> {
    match profile.category {
        AssignmentCategory::BranchAppointed => vec![WorkflowApprover::pending(
            "Branch Committee",
            ApprovalLevel::Branch,
            1,
        )],
        AssignmentCategory::FieldAssigned => vec![WorkflowApprover::pending(
            "Field Overseer",
            ApprovalLevel::Overseer,
            1,
        )],
        AssignmentCategory::SpecialProject => vec![WorkflowApprover::pending(
            "Zone Overseer",
            ApprovalLevel::Zone,
            1,
        )],
        _ => Vec::new(),
    }
}

/// Advisory signal for the calling process: whether this assignment
/// should be preceded by a consultation round.
pub(super) fn requires_pre_consultation(profile: &AssignmentProfile) -> bool {
    profile.category == AssignmentCategory::BranchAppointed
        || !profile.impacted_roles.is_empty()
        || profile.priority.is_elevated()
}

/// Advisory signal: whether an impact assessment should be prepared.
pub(super) fn requires_impact_assessment(profile: &AssignmentProfile) -> bool {
    profile.impacted_roles.len() > 2
        || profile.priority.is_elevated()
        || profile.category == AssignmentCategory::BranchAppointed
}
