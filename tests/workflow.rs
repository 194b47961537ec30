#![forbid(unsafe_code)]
use chrono::{DateTime, TimeZone, Utc};
use crewsched::workflow::{ApprovalLevel, ApprovalStatus, ImpactLevel, PreConsultation, StepStatus};
use crewsched::{
    advance_workflow, calculate_progress, create_workflow, next_action, process_approval,
    requires_impact_assessment, requires_pre_consultation, validate_workflow, AssignmentCategory,
    AssignmentId, AssignmentProfile, AssignmentWorkflow, Priority, WorkflowError,
};

#[test]
fn branch_appointed_urgent_builds_five_steps() {
    let wf = create_workflow(
        &profile(AssignmentCategory::BranchAppointed, Priority::Urgent),
        now(),
    );

    let names: Vec<&str> = wf.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Initial Review",
            "Pre-Consultation",
            "Impact Assessment",
            "Branch Approval",
            "Final Confirmation",
        ]
    );
    let orders: Vec<u32> = wf.steps.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    assert_eq!(wf.current_step().name, "Initial Review");

    assert_eq!(wf.approvers.len(), 1);
    assert_eq!(wf.approvers[0].role, "Branch Committee");
    assert_eq!(wf.approvers[0].level, ApprovalLevel::Branch);
}

#[test]
fn field_assigned_builds_overseer_chain() {
    let wf = create_workflow(
        &profile(AssignmentCategory::FieldAssigned, Priority::Medium),
        now(),
    );

    let names: Vec<&str> = wf.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Initial Review", "Overseer Approval", "Final Confirmation"]
    );
    assert_eq!(wf.approvers.len(), 1);
    assert_eq!(wf.approvers[0].role, "Field Overseer");
    assert_eq!(wf.approvers[0].level, ApprovalLevel::Overseer);
}

#[test]
fn training_category_has_no_approval_gate() {
    let wf = create_workflow(
        &profile(AssignmentCategory::Training, Priority::Medium),
        now(),
    );

    let names: Vec<&str> = wf.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Initial Review", "Final Confirmation"]);
    assert!(wf.approvers.is_empty());
}

#[test]
fn advancing_completes_step_and_starts_next() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::FieldAssigned, Priority::Medium),
        now(),
    );
    let first = wf.steps[0].id.clone();

    advance_workflow(&mut wf, &first, "admin-1", Some("kickoff done".into()), now()).unwrap();

    assert_eq!(wf.steps[0].status, StepStatus::Completed);
    assert_eq!(wf.steps[0].completed_by.as_deref(), Some("admin-1"));
    assert_eq!(wf.steps[1].status, StepStatus::InProgress);
    assert_eq!(wf.current_step().name, "Overseer Approval");
}

#[test]
fn advancing_the_last_step_finishes_the_workflow() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::Training, Priority::Medium),
        now(),
    );

    for step_id in wf.steps.iter().map(|s| s.id.clone()).collect::<Vec<_>>() {
        advance_workflow(&mut wf, &step_id, "admin-1", None, now()).unwrap();
    }

    // current_step stays on the completed last step.
    assert_eq!(wf.current_step().name, "Final Confirmation");
    assert_eq!(wf.current_step().status, StepStatus::Completed);
    assert_eq!(calculate_progress(&wf), 100);
}

#[test]
fn unknown_step_is_a_hard_error() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::Training, Priority::Medium),
        now(),
    );
    let bogus = crewsched::workflow::StepId::new("nope");

    let err = advance_workflow(&mut wf, &bogus, "admin-1", None, now()).unwrap_err();
    assert!(matches!(err, WorkflowError::StepNotFound(_)));
}

#[test]
fn progress_is_rounded_and_monotonic() {
    // Emergency at medium priority yields exactly three steps.
    let mut wf = create_workflow(
        &profile(AssignmentCategory::Emergency, Priority::Medium),
        now(),
    );
    assert_eq!(wf.steps.len(), 3);
    assert_eq!(calculate_progress(&wf), 0);

    let ids: Vec<_> = wf.steps.iter().map(|s| s.id.clone()).collect();
    let mut last = 0;
    let expected = [33, 67, 100];
    for (step_id, want) in ids.iter().zip(expected) {
        advance_workflow(&mut wf, step_id, "admin-1", None, now()).unwrap();
        let progress = calculate_progress(&wf);
        assert_eq!(progress, want);
        assert!(progress >= last);
        last = progress;
    }
}

#[test]
fn approvals_advance_in_either_order() {
    for reverse in [false, true] {
        let mut wf = two_approver_workflow();
        let before = wf.current_step;

        let (first, second) = if reverse { ("u2", "u1") } else { ("u1", "u2") };
        process_approval(&mut wf, first, true, None, now()).unwrap();
        assert_eq!(wf.current_step, before, "must wait for all approvers");
        process_approval(&mut wf, second, true, Some("ok".into()), now()).unwrap();

        assert_eq!(wf.current_step, before + 1);
        // The auto-advance path moves the pointer without completing
        // the step it left behind.
        assert_eq!(wf.steps[before].status, StepStatus::Pending);

        let err = process_approval(&mut wf, first, true, None, now()).unwrap_err();
        assert!(matches!(err, WorkflowError::ApproverNotFoundOrProcessed(_)));
    }
}

#[test]
fn rejection_blocks_auto_advance() {
    let mut wf = two_approver_workflow();
    let before = wf.current_step;

    process_approval(&mut wf, "u1", false, Some("not ready".into()), now()).unwrap();
    process_approval(&mut wf, "u2", true, None, now()).unwrap();

    assert_eq!(wf.current_step, before);
    assert_eq!(wf.approvers[0].status, ApprovalStatus::Rejected);
    assert_eq!(wf.approvers[0].comments.as_deref(), Some("not ready"));
}

#[test]
fn next_action_reports_pending_step() {
    let wf = create_workflow(
        &profile(AssignmentCategory::Emergency, Priority::Medium),
        now(),
    );

    let action = next_action(&wf);
    assert_eq!(action.action, "Initial Review");
    assert!(!action.urgent);
}

#[test]
fn next_action_flags_emergency_steps_urgent() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::Emergency, Priority::Medium),
        now(),
    );
    // Park the workflow on the still-pending approval step, as the
    // approval auto-advance path does.
    wf.current_step = 1;

    let action = next_action(&wf);
    assert_eq!(action.action, "Emergency Approval");
    assert!(action.urgent);
}

#[test]
fn next_action_falls_back_to_pending_approver() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::FieldAssigned, Priority::Medium),
        now(),
    );
    let first = wf.steps[0].id.clone();
    advance_workflow(&mut wf, &first, "admin-1", None, now()).unwrap();
    // Current step is now in progress, so the pending approval is next.
    let action = next_action(&wf);
    assert_eq!(action.action, "Approval Required");
    assert_eq!(action.description, "Field Overseer approval needed");
}

#[test]
fn next_action_complete_when_done() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::Training, Priority::Medium),
        now(),
    );
    for step_id in wf.steps.iter().map(|s| s.id.clone()).collect::<Vec<_>>() {
        advance_workflow(&mut wf, &step_id, "admin-1", None, now()).unwrap();
    }

    let action = next_action(&wf);
    assert_eq!(action.action, "Complete");
    assert_eq!(action.description, "Workflow completed");
}

#[test]
fn validate_workflow_checks_structure() {
    let wf = create_workflow(
        &profile(AssignmentCategory::BranchAppointed, Priority::Urgent),
        now(),
    );
    assert!(validate_workflow(&wf).is_valid);

    // Step order tampering is caught, and the check never re-sorts.
    let mut shuffled = wf.clone();
    shuffled.steps.swap(0, 3);
    let result = validate_workflow(&shuffled);
    assert!(!result.is_valid);
    assert!(result
        .errors
        .contains(&"Workflow steps are not in correct order".to_string()));
    assert_eq!(shuffled.steps[0].name, "Branch Approval");
}

#[test]
fn validate_workflow_requires_document_notes() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::BranchAppointed, Priority::Medium),
        now(),
    );
    let consultation = wf.steps[1].id.clone();
    advance_workflow(&mut wf, &consultation, "admin-1", Some("minutes attached".into()), now())
        .unwrap();

    let result = validate_workflow(&wf);
    assert!(result
        .errors
        .contains(&"Some completed steps are missing required documents".to_string()));

    wf.steps[1].notes = Some("documents_verified: consultation minutes".into());
    assert!(validate_workflow(&wf).is_valid);
}

#[test]
fn validate_workflow_rejects_duplicate_approvers() {
    let mut wf = two_approver_workflow();
    wf.approvers[1].user_id = "u1".to_string();

    let result = validate_workflow(&wf);
    assert!(result
        .errors
        .contains(&"Duplicate approvers found".to_string()));
}

#[test]
fn consultations_append_to_the_log() {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::BranchAppointed, Priority::Medium),
        now(),
    );
    let later = Utc.with_ymd_and_hms(2026, 2, 2, 9, 0, 0).unwrap();

    crewsched::workflow::record_consultation(
        &mut wf,
        PreConsultation {
            id: "c-1".into(),
            consulted_person: "elder-3".into(),
            consulted_role: "Service Committee".into(),
            topic: "crew reassignment".into(),
            notes: "no objection".into(),
            impact_level: ImpactLevel::Low,
            recommendations: vec!["confirm in writing".into()],
            consulted_at: later,
            consulted_by: "admin-1".into(),
        },
        later,
    );

    assert_eq!(wf.consultations.len(), 1);
    assert_eq!(wf.updated_at, later);
}

#[test]
fn advisory_predicates_follow_category_and_priority() {
    let branch = profile(AssignmentCategory::BranchAppointed, Priority::Low);
    assert!(requires_pre_consultation(&branch));
    assert!(requires_impact_assessment(&branch));

    let mut field = profile(AssignmentCategory::FieldAssigned, Priority::Low);
    assert!(!requires_pre_consultation(&field));
    assert!(!requires_impact_assessment(&field));

    field.impacted_roles = vec!["coordinator".into()];
    assert!(requires_pre_consultation(&field));
    assert!(!requires_impact_assessment(&field));

    field.impacted_roles = vec!["a".into(), "b".into(), "c".into()];
    assert!(requires_impact_assessment(&field));

    let urgent = profile(AssignmentCategory::Training, Priority::Urgent);
    assert!(requires_pre_consultation(&urgent));
    assert!(requires_impact_assessment(&urgent));
}

#[test]
fn workflow_survives_a_json_round_trip() {
    let wf = create_workflow(
        &profile(AssignmentCategory::SpecialProject, Priority::High),
        now(),
    );

    let json = serde_json::to_string(&wf).unwrap();
    let restored: AssignmentWorkflow = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id, wf.id);
    assert_eq!(restored.steps.len(), wf.steps.len());
    assert_eq!(restored.approvers[0].role, "Zone Overseer");
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()
}

fn profile(category: AssignmentCategory, priority: Priority) -> AssignmentProfile {
    AssignmentProfile {
        assignment_id: AssignmentId::new("asg-1"),
        category,
        priority,
        impacted_roles: Vec::new(),
    }
}

/// FieldAssigned workflow with its approver resolved plus a second
/// zone-level approver, as a multi-gate chain.
fn two_approver_workflow() -> AssignmentWorkflow {
    let mut wf = create_workflow(
        &profile(AssignmentCategory::FieldAssigned, Priority::Medium),
        now(),
    );
    wf.approvers[0].user_id = "u1".to_string();
    let mut second = wf.approvers[0].clone();
    second.id = "apr-2".to_string();
    second.user_id = "u2".to_string();
    second.role = "Zone Overseer".to_string();
    second.level = ApprovalLevel::Zone;
    second.order = 2;
    wf.approvers.push(second);
    wf
}
