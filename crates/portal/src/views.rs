//! Per-role headline summaries computed from a dashboard snapshot.
//!
//! Hosts render these directly; nothing here touches a UI toolkit.

use crate::notify::Notifier;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{AppError, DashboardStats, Department, Role, Task, TaskStatus};

pub const EXPORT_SUCCESS_MESSAGE: &str = "Dashboard data exported successfully";
pub const TASKS_MODULE_NOTICE: &str = "Task management module is under development";
pub const REPORTS_MODULE_NOTICE: &str = "Reporting module is under development";

/// Colour accent of a headline tile.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TileTone {
    Primary,
    Info,
    Warning,
    Success,
}

impl TileTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            TileTone::Primary => "tile-primary",
            TileTone::Info => "tile-info",
            TileTone::Warning => "tile-warning",
            TileTone::Success => "tile-success",
        }
    }
}

/// One headline number on a dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub tone: TileTone,
    /// Upward trend badge in percent, when the tile shows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_up: Option<u8>,
}

impl StatTile {
    fn new(label: &'static str, value: impl ToString, tone: TileTone) -> Self {
        Self {
            label,
            value: value.to_string(),
            tone,
            trend_up: None,
        }
    }

    fn trending(mut self, percent: u8) -> Self {
        self.trend_up = Some(percent);
        self
    }
}

/// Everything a role's dashboard shows above the activity and task lists.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardView {
    pub role: Role,
    pub heading: &'static str,
    pub tiles: Vec<StatTile>,
    pub show_departments: bool,
    pub can_export: bool,
}

pub fn heading(role: Role) -> &'static str {
    match role {
        Role::HeadOfDepartment => "Department Overview",
        Role::SubDepartmentAdmin => "Sub-department Dashboard",
        Role::TeamMember => "My Dashboard",
    }
}

/// Build the headline tiles for `role`.
pub fn summarize(role: Role, stats: &DashboardStats, departments: &[Department]) -> DashboardView {
    let tiles = match role {
        Role::HeadOfDepartment => vec![
            StatTile::new("Total Sub-departments", departments.len(), TileTone::Primary),
            StatTile::new("Total Team Members", stats.team_members, TileTone::Info).trending(12),
            StatTile::new("Active Tasks", stats.pending_tasks, TileTone::Warning),
            StatTile::new("Completed Tasks", stats.completed_tasks, TileTone::Success).trending(8),
        ],
        Role::SubDepartmentAdmin => vec![
            StatTile::new("Team Members", stats.team_members, TileTone::Primary),
            StatTile::new("Completed Tasks", stats.completed_tasks, TileTone::Success).trending(12),
            StatTile::new("Pending Tasks", stats.pending_tasks, TileTone::Warning),
            StatTile::new(
                "Department Progress",
                format!("{}%", stats.department_progress),
                TileTone::Info,
            ),
        ],
        Role::TeamMember => vec![
            StatTile::new("My Tasks", stats.upcoming_tasks.len(), TileTone::Primary),
            StatTile::new(
                "Completion Rate",
                format!("{}%", completion_rate(&stats.upcoming_tasks)),
                TileTone::Success,
            ),
            StatTile::new("Team Communications", stats.communications, TileTone::Info),
        ],
    };

    DashboardView {
        role,
        heading: heading(role),
        tiles,
        show_departments: role == Role::HeadOfDepartment,
        can_export: role == Role::HeadOfDepartment,
    }
}

/// Rounded percentage of `tasks` already completed; 0 for an empty list.
pub fn completion_rate(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u32
}

#[derive(Serialize)]
struct SnapshotExport<'a> {
    exported_at: DateTime<Utc>,
    stats: &'a DashboardStats,
    departments: &'a [Department],
}

/// Serialize the current snapshot as pretty JSON and announce the export.
pub fn export_snapshot<N: Notifier + ?Sized>(
    stats: &DashboardStats,
    departments: &[Department],
    notifier: &N,
) -> Result<String, AppError> {
    let export = SnapshotExport {
        exported_at: Utc::now(),
        stats,
        departments,
    };
    let json = serde_json::to_string_pretty(&export)?;
    tracing::info!(bytes = json.len(), "exported dashboard snapshot");
    notifier.success(EXPORT_SUCCESS_MESSAGE);
    Ok(json)
}

/// Info notice for a task's Details button.
pub fn show_task_details<N: Notifier + ?Sized>(task: &Task, notifier: &N) {
    notifier.info(&format!("Task details: {}", task.title));
}

/// Info notice for the navbar bell.
pub fn announce_unread<N: Notifier + ?Sized>(unread: u32, notifier: &N) {
    notifier.info(&format!("You have {unread} unread notifications"));
}
