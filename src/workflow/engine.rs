use super::types::{
    ApprovalStatus, AssignmentWorkflow, NextAction, PreConsultation, StepId, StepStatus,
    WorkflowError, WorkflowValidation,
};
use chrono::{DateTime, Utc};

/// Completes the named step and moves the workflow onto the next one.
/// If the completed step is the last, `current_step` stays on it and
/// the workflow is done. Mutates the workflow in place; the caller owns
/// the load-mutate-persist cycle.
pub(super) fn advance_workflow(
    workflow: &mut AssignmentWorkflow,
    step_id: &StepId,
    completed_by: &str,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    let idx = workflow
        .steps
        .iter()
        .position(|step| &step.id == step_id)
        .ok_or_else(|| WorkflowError::StepNotFound(step_id.as_str().to_string()))?;

    let step = &mut workflow.steps[idx];
    step.status = StepStatus::Completed;
    step.completed_by = Some(completed_by.to_string());
    step.completed_at = Some(now);
    step.notes = notes;

    if idx + 1 < workflow.steps.len() {
        workflow.steps[idx + 1].status = StepStatus::InProgress;
        workflow.current_step = idx + 1;
    }

    workflow.updated_at = now;

    #[cfg(feature = "logging")]
    tracing::debug!(
        workflow = %workflow.id,
        step = step_id.as_str(),
        by = completed_by,
        "step completed"
    );

    Ok(())
}

/// Records one approver's decision. Once every approver has decided and
/// all approved, `current_step` moves to the next step — without
/// marking the current one completed. That asymmetry with
/// `advance_workflow` is intentional: callers that want the skipped
/// step closed call `advance_workflow` on it afterwards.
pub(super) fn process_approval(
    workflow: &mut AssignmentWorkflow,
    approver_user_id: &str,
    approved: bool,
    comments: Option<String>,
    now: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    let idx = workflow
        .approvers
        .iter()
        .position(|a| a.user_id == approver_user_id && a.status == ApprovalStatus::Pending)
        .ok_or_else(|| {
            WorkflowError::ApproverNotFoundOrProcessed(approver_user_id.to_string())
        })?;

    let approver = &mut workflow.approvers[idx];
    approver.status = if approved {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Rejected
    };
    approver.comments = comments;
    approver.decided_at = Some(now);

    let none_pending = workflow
        .approvers
        .iter()
        .all(|a| a.status != ApprovalStatus::Pending);
    let all_approved = workflow
        .approvers
        .iter()
        .all(|a| a.status == ApprovalStatus::Approved);

    if none_pending && all_approved && workflow.current_step + 1 < workflow.steps.len() {
        workflow.current_step += 1;
    }

    workflow.updated_at = now;
    Ok(())
}

/// Appends a consultation record to the workflow log.
pub(super) fn record_consultation(
    workflow: &mut AssignmentWorkflow,
    consultation: PreConsultation,
    now: DateTime<Utc>,
) {
    workflow.consultations.push(consultation);
    workflow.updated_at = now;
}

/// Completion percentage, rounded: `round(100 * completed / total)`.
pub(super) fn calculate_progress(workflow: &AssignmentWorkflow) -> u32 {
    if workflow.steps.is_empty() {
        return 0;
    }
    let completed = workflow
        .steps
        .iter()
        .filter(|s| s.status == StepStatus::Completed)
        .count();
    ((completed as f64 / workflow.steps.len() as f64) * 100.0).round() as u32
}

/// What needs to happen next: the current step if it is still pending,
/// otherwise the first pending approval, otherwise nothing.
pub(super) fn next_action(workflow: &AssignmentWorkflow) -> NextAction {
    let current = workflow.current_step();

    if current.status == StepStatus::Pending {
        return NextAction {
            action: current.name.clone(),
            assigned_to: current.assigned_to.clone(),
            description: current.description.clone(),
            urgent: current.name.contains("Emergency") || current.name.contains("Urgent"),
        };
    }

    if let Some(approver) = workflow
        .approvers
        .iter()
        .find(|a| a.status == ApprovalStatus::Pending)
    {
        return NextAction {
            action: "Approval Required".to_string(),
            assigned_to: (!approver.user_id.is_empty()).then(|| approver.user_id.clone()),
            description: format!("{} approval needed", approver.role),
            urgent: false,
        };
    }

    NextAction {
        action: "Complete".to_string(),
        assigned_to: None,
        description: "Workflow completed".to_string(),
        urgent: false,
    }
}

/// Structural sanity check. Read-only: the step list is inspected in
/// place and never re-sorted.
pub(super) fn validate_workflow(workflow: &AssignmentWorkflow) -> WorkflowValidation {
    let mut errors = Vec::new();

    let ordered = workflow
        .steps
        .windows(2)
        .all(|pair| pair[0].order <= pair[1].order);
    if !ordered {
        errors.push("Workflow steps are not in correct order".to_string());
    }

    let missing_documents = workflow.steps.iter().any(|step| {
        step.status == StepStatus::Completed
            && !step.required_documents.is_empty()
            && !step
                .notes
                .as_deref()
                .is_some_and(|n| n.contains("documents_verified"))
    });
    if missing_documents {
        errors.push("Some completed steps are missing required documents".to_string());
    }

    let duplicate_approver = workflow.approvers.iter().enumerate().any(|(i, a)| {
        !a.user_id.is_empty()
            && workflow.approvers[..i]
                .iter()
                .any(|other| other.user_id == a.user_id)
    });
    if duplicate_approver {
        errors.push("Duplicate approvers found".to_string());
    }

    WorkflowValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
