use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of an upcoming task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Completed,
    InProgress,
    Pending,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Completed,
        TaskStatus::InProgress,
        TaskStatus::Pending,
        TaskStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Pending => "pending",
            TaskStatus::Overdue => "overdue",
        }
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot entities
// ---------------------------------------------------------------------------

/// Person attached to an activity entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityUser {
    pub name: String,
    /// Job title shown next to the name, e.g. "Team Lead".
    pub role: String,
}

/// A recent-activity feed entry. Display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub action: String,
    pub user: ActivityUser,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An upcoming task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub priority: TaskPriority,
}

/// Sub-department summary row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub head: String,
    pub members: u32,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

/// One complete generation of dashboard statistics.
///
/// Snapshots are replaced wholesale; nothing inside is ever patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub team_members: u32,
    pub resources: u32,
    pub department_progress: u8,
    pub communications: u32,
    pub recent_activity: Vec<Activity>,
    pub upcoming_tasks: Vec<Task>,
}

impl DashboardStats {
    /// Every id minted for this snapshot, activities first.
    pub fn entity_ids(&self) -> Vec<&str> {
        self.recent_activity
            .iter()
            .map(|a| a.id.as_str())
            .chain(self.upcoming_tasks.iter().map(|t| t.id.as_str()))
            .collect()
    }
}
