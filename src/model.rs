use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strong identifier for a WorkAssignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentId(String);

impl AssignmentId {
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

/// Strong identifier for a trade crew
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrewId(String);

impl CrewId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strong identifier for a volunteer
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VolunteerId(String);

impl VolunteerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lifecycle status of an assignment. Cancelled assignments are never
/// deleted; conflict and capacity scans skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// High and urgent assignments trigger extra workflow steps.
    pub fn is_elevated(self) -> bool {
        matches!(self, Priority::High | Priority::Urgent)
    }
}

/// One skill an assignment needs, with headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRequirement {
    pub skill: String,
    pub quantity: u32,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VolunteerRequirement {
    pub fn new<S: Into<String>>(skill: S, quantity: u32) -> Self {
        Self {
            skill: skill.into(),
            quantity,
            is_optional: false,
            notes: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
    Declined,
}

/// A volunteer placed on an assignment, with the skills they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedVolunteer {
    pub volunteer_id: VolunteerId,
    #[serde(default)]
    pub skills: Vec<String>,
    pub confirmation: ConfirmationStatus,
}

impl AssignedVolunteer {
    pub fn new(volunteer_id: VolunteerId, skills: Vec<String>) -> Self {
        Self {
            volunteer_id,
            skills,
            confirmation: ConfirmationStatus::Pending,
        }
    }
}

/// A scheduled unit of work for one trade crew (UTC interval).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkAssignment {
    pub id: AssignmentId,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub trade_crew_id: CrewId,
    pub status: AssignmentStatus,
    pub priority: Priority,
    #[serde(default)]
    pub required_volunteers: Vec<VolunteerRequirement>,
    #[serde(default)]
    pub assigned_volunteers: Vec<AssignedVolunteer>,
}

impl WorkAssignment {
    /// Creates an assignment, validating that `end > start`.
    pub fn new(
        title: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        trade_crew_id: CrewId,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            id: AssignmentId::random(),
            title,
            start,
            end,
            trade_crew_id,
            status: AssignmentStatus::Scheduled,
            priority: Priority::Medium,
            required_volunteers: Vec::new(),
            assigned_volunteers: Vec::new(),
        })
    }

    /// Whole hours between start and end.
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AssignmentStatus::Cancelled
    }
}

/// An assignment template not yet committed to storage: carries no id.
/// Produced by the recurrence generator; the caller mints ids on persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDraft {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub trade_crew_id: CrewId,
    pub status: AssignmentStatus,
    pub priority: Priority,
    #[serde(default)]
    pub required_volunteers: Vec<VolunteerRequirement>,
    #[serde(default)]
    pub assigned_volunteers: Vec<AssignedVolunteer>,
}

impl AssignmentDraft {
    /// Creates a draft, validating that `end > start`.
    pub fn new(
        title: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        trade_crew_id: CrewId,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            title,
            start,
            end,
            trade_crew_id,
            status: AssignmentStatus::Scheduled,
            priority: Priority::Medium,
            required_volunteers: Vec::new(),
            assigned_volunteers: Vec::new(),
        })
    }

    /// Promotes the draft to a full assignment with a fresh id.
    pub fn into_assignment(self) -> WorkAssignment {
        WorkAssignment {
            id: AssignmentId::random(),
            title: self.title,
            start: self.start,
            end: self.end,
            trade_crew_id: self.trade_crew_id,
            status: self.status,
            priority: self.priority,
            required_volunteers: self.required_volunteers,
            assigned_volunteers: self.assigned_volunteers,
        }
    }
}
