use crate::model::{AssignmentId, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Compliance classification driving which approval chain applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentCategory {
    BranchAppointed,
    FieldAssigned,
    Temporary,
    Emergency,
    Training,
    SpecialProject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalLevel {
    Branch,
    Zone,
    Overseer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// Strong identifier for a workflow step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(String);

impl StepId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One stage of the approval/confirmation process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: StepId,
    pub name: String,
    pub description: String,
    pub status: StepStatus,
    /// Document codes that must accompany step completion.
    #[serde(default)]
    pub required_documents: Vec<String>,
    /// 1-based position in the workflow.
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkflowStep {
    pub(crate) fn pending(name: &str, description: &str, required_documents: &[&str]) -> Self {
        Self {
            id: StepId::random(),
            name: name.to_string(),
            description: description.to_string(),
            status: StepStatus::Pending,
            required_documents: required_documents.iter().map(|d| d.to_string()).collect(),
            order: 0, // assigned once the step list is final
            assigned_to: None,
            completed_by: None,
            completed_at: None,
            notes: None,
        }
    }
}

/// A role-bound approval gate. `user_id` stays empty until the calling
/// system resolves the concrete approver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowApprover {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub level: ApprovalLevel,
    pub status: ApprovalStatus,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl WorkflowApprover {
    pub(crate) fn pending(role: &str, level: ApprovalLevel, order: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: String::new(),
            role: role.to_string(),
            level,
            status: ApprovalStatus::Pending,
            order,
            comments: None,
            decided_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

/// Record of a consultation held before the assignment was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreConsultation {
    pub id: String,
    pub consulted_person: String,
    pub consulted_role: String,
    pub topic: String,
    pub notes: String,
    pub impact_level: ImpactLevel,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub consulted_at: DateTime<Utc>,
    pub consulted_by: String,
}

/// What the workflow builder needs to know about an assignment.
/// Workflows hold the assignment id only; embedding the full record
/// would create an ownership cycle with stale copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentProfile {
    pub assignment_id: AssignmentId,
    pub category: AssignmentCategory,
    pub priority: Priority,
    #[serde(default)]
    pub impacted_roles: Vec<String>,
}

/// Approval progress for one assignment. Steps are ordered by `order`
/// at construction and never reordered; `current_step` indexes into
/// `steps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentWorkflow {
    pub id: String,
    pub assignment_id: AssignmentId,
    pub steps: Vec<WorkflowStep>,
    pub current_step: usize,
    pub approvers: Vec<WorkflowApprover>,
    #[serde(default)]
    pub consultations: Vec<PreConsultation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssignmentWorkflow {
    /// The step the workflow currently sits on.
    pub fn current_step(&self) -> &WorkflowStep {
        &self.steps[self.current_step]
    }
}

/// The next thing a human has to do to move the workflow along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextAction {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub description: String,
    pub urgent: bool,
}

/// Result of the structural sanity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Hard errors: the caller referenced state that does not exist or was
/// already consumed. Business-rule failures never surface here.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("step not found: {0}")]
    StepNotFound(String),
    #[error("approver not found or already processed: {0}")]
    ApproverNotFoundOrProcessed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
