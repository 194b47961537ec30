use crate::model::AssignmentId;
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Which kind of resource a capacity scan aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    TradeCrew,
    Volunteer,
}

/// Inclusive UTC date range for capacity scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, String> {
        if end < start {
            return Err("range end must not precede start".to_string());
        }
        Ok(Self { start, end })
    }
}

/// Capacity options
#[derive(Debug, Clone)]
pub struct CapacityOptions {
    /// Hours credited to a resource per day when no override exists.
    pub default_daily_hours: i64,
    /// Per-resource daily hours, keyed by resource id.
    pub resource_hours: HashMap<String, i64>,
}

impl Default for CapacityOptions {
    fn default() -> Self {
        Self {
            default_daily_hours: super::DEFAULT_DAILY_HOURS,
            resource_hours: HashMap::new(),
        }
    }
}

impl CapacityOptions {
    pub(crate) fn daily_hours_for(&self, resource_id: &str) -> i64 {
        self.resource_hours
            .get(resource_id)
            .copied()
            .unwrap_or(self.default_daily_hours)
    }
}

/// Per-resource-per-day utilization snapshot. Recomputed on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCapacity {
    pub resource_id: String,
    /// Display name; this core has no resource catalog, so it carries
    /// the id until the caller resolves it.
    pub resource_name: String,
    pub resource_type: ResourceType,
    pub date: NaiveDate,
    pub total_capacity: i64,
    pub allocated_capacity: i64,
    pub available_capacity: i64,
    pub overallocation: i64,
    pub utilization_percentage: u32,
}

impl ResourceCapacity {
    /// Re-derives available/overallocation/utilization from the totals.
    pub(crate) fn recompute(&mut self) {
        self.available_capacity = (self.total_capacity - self.allocated_capacity).max(0);
        self.overallocation = (self.allocated_capacity - self.total_capacity).max(0);
        self.utilization_percentage = if self.total_capacity > 0 {
            ((self.allocated_capacity as f64 / self.total_capacity as f64) * 100.0).round() as u32
        } else {
            0
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    ResourceDoubleBooking,
    VolunteerUnavailable,
    CapacityOverrun,
    SkillMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A detected scheduling problem. Ephemeral: re-derived on every scan,
/// with no identity carried across scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConflict {
    pub id: String,
    pub kind: ConflictKind,
    pub severity: Severity,
    pub description: String,
    pub affected_assignments: Vec<AssignmentId>,
    pub affected_resources: Vec<String>,
    pub suggested_resolution: String,
}

impl SchedulingConflict {
    pub(crate) fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Pre-commit preview for a candidate assignment: where it could be
/// placed, what it would collide with, and its capacity footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingSuggestion {
    pub suggested_dates: Vec<DateTime<Utc>>,
    pub potential_conflicts: Vec<SchedulingConflict>,
    pub capacity_impact: Vec<ResourceCapacity>,
}

/// Outcome of validating a candidate assignment. Violations block the
/// commit; warnings do not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// Recurrence pattern for expanding a base assignment into instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrencePattern {
    pub frequency: Frequency,
    /// Every Nth day/week/month; zero is treated as 1.
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<Weekday>>,
}

impl RecurrencePattern {
    pub fn new(frequency: Frequency, interval: u32) -> Self {
        Self {
            frequency,
            interval,
            end_date: None,
            occurrences: None,
            days_of_week: None,
        }
    }
}
