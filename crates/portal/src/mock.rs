//! Role-aware mock data generation.
//!
//! Every call draws fresh values; nothing is cached between snapshots.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared_types::{
    Activity, ActivityUser, AppError, DashboardStats, Department, Role, Task, TaskPriority,
    TaskStatus,
};
use uuid::Uuid;

/// Task count for the team-member baseline before jitter.
pub const BASE_TASKS: u32 = 125;
/// Upper bound (exclusive) of the random task jitter.
pub const TASK_JITTER: u32 = 50;

pub const ACTIVITY_COUNT: usize = 5;
pub const UPCOMING_TASK_COUNT: usize = 4;

const MS_PER_DAY: i64 = 86_400_000;
const ACTIVITY_WINDOW_DAYS: i64 = 7;
const DUE_WINDOW_DAYS: i64 = 14;

const ACTIVITY_DETAIL: &str = "Additional context about this activity";

const ACTIONS: &[&str] = &[
    "updated task",
    "completed task",
    "assigned task",
    "commented on task",
    "shared resource",
    "sent notification",
    "updated report",
    "submitted form",
];

/// People a department head mostly hears from: unit heads and their admins.
const HOD_ROSTER: &[(&str, &str)] = &[
    ("Dr. Rajesh Kumar", "Labour Relations Head"),
    ("Prof. Anita Singh", "Skill Development Head"),
    ("Mr. David Chen", "Employment Services Head"),
    ("Dr. Sophia Williams", "Training Programs Head"),
    ("Miguel Santos", "Sub-Department Admin"),
];

const SUB_DEPARTMENT_ROSTER: &[(&str, &str)] = &[
    ("Alex Johnson", "Team Lead"),
    ("Sarah Chen", "Data Analyst"),
    ("Miguel Santos", "Project Manager"),
    ("Priya Patel", "Department Head"),
    ("James Wilson", "Developer"),
];

const TEAM_ROSTER: &[(&str, &str)] = &[
    ("Alex Johnson", "Team Lead"),
    ("Sarah Chen", "Data Analyst"),
    ("James Wilson", "Developer"),
    ("Emma Rodriguez", "Training Coordinator"),
    ("Liam O'Brien", "Field Officer"),
];

const HOD_TASKS: &[&str] = &[
    "Approve sub-department budgets",
    "Review quarterly department report",
    "Prepare presentation for executives",
    "Evaluate sub-department performance",
    "Sign off on resource allocation",
    "Chair heads-of-unit meeting",
    "Review policy compliance audit",
    "Update department strategic plan",
];

const SUB_DEPARTMENT_TASKS: &[&str] = &[
    "Review team performance metrics",
    "Assign tasks for next cycle",
    "Update department documentation",
    "Submit resource request form",
    "Schedule team meeting",
    "Compile weekly progress report",
    "Review budget allocation",
    "Update project timeline",
];

const TEAM_TASKS: &[&str] = &[
    "Complete quarterly performance report",
    "Review team resources allocation",
    "Prepare presentation for department meeting",
    "Update project documentation",
    "Submit weekly timesheet",
    "Attend skills workshop",
    "Respond to trainee queries",
    "File field visit notes",
];

/// Task volume multiplier in percent: HOD above sub-department admin above baseline.
pub fn task_multiplier_percent(role: Role) -> u32 {
    match role {
        Role::HeadOfDepartment => 150,
        Role::SubDepartmentAdmin => 120,
        Role::TeamMember => 100,
    }
}

/// Fixed head count shown for each role.
pub fn team_member_count(role: Role) -> u32 {
    match role {
        Role::HeadOfDepartment => 87,
        Role::SubDepartmentAdmin => 28,
        Role::TeamMember => 12,
    }
}

/// Scaled task volume before jitter.
pub fn base_task_volume(role: Role) -> u32 {
    BASE_TASKS * task_multiplier_percent(role) / 100
}

fn roster(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::HeadOfDepartment => HOD_ROSTER,
        Role::SubDepartmentAdmin => SUB_DEPARTMENT_ROSTER,
        Role::TeamMember => TEAM_ROSTER,
    }
}

fn task_titles(role: Role) -> &'static [&'static str] {
    match role {
        Role::HeadOfDepartment => HOD_TASKS,
        Role::SubDepartmentAdmin => SUB_DEPARTMENT_TASKS,
        Role::TeamMember => TEAM_TASKS,
    }
}

/// Fixed sub-department catalog; identical for every role.
pub fn departments() -> Vec<Department> {
    [
        ("dept-1", "Labour Relations", "Dr. Rajesh Kumar", 32, 78),
        ("dept-2", "Skill Development", "Prof. Anita Singh", 45, 65),
        ("dept-3", "Employment Services", "Mr. David Chen", 28, 82),
        ("dept-4", "Training Programs", "Dr. Sophia Williams", 36, 71),
    ]
    .into_iter()
    .map(|(id, name, head, members, progress)| Department {
        id: id.to_string(),
        name: name.to_string(),
        head: head.to_string(),
        members,
        progress,
    })
    .collect()
}

/// Random snapshot builder. Generic over the RNG so tests can seed it.
#[derive(Debug, Clone)]
pub struct MockGenerator<R> {
    rng: R,
}

impl MockGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MockGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a complete snapshot for `role` relative to `now`.
    pub fn stats(&mut self, role: Role, now: DateTime<Utc>) -> Result<DashboardStats, AppError> {
        let total_tasks = base_task_volume(role) + self.rng.gen_range(0..TASK_JITTER);
        let completed_share: f64 = self.rng.gen_range(0.5..=0.7);
        let completed_tasks = ((f64::from(total_tasks) * completed_share).floor() as u32).min(total_tasks);
        let pending_tasks = total_tasks - completed_tasks;

        Ok(DashboardStats {
            total_tasks,
            completed_tasks,
            pending_tasks,
            team_members: team_member_count(role),
            resources: 34 + self.rng.gen_range(0..10),
            department_progress: 68 + self.rng.gen_range(0..20),
            communications: 56 + self.rng.gen_range(0..30),
            recent_activity: self.activities(role, ACTIVITY_COUNT, now)?,
            upcoming_tasks: self.tasks(role, UPCOMING_TASK_COUNT, now)?,
        })
    }

    /// Activity entries from the trailing seven days, users drawn from the role's roster.
    pub fn activities(
        &mut self,
        role: Role,
        count: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<Activity>, AppError> {
        let people = roster(role);
        (0..count)
            .map(|_| {
                let action = pick(&mut self.rng, ACTIONS, "action")?;
                let (name, title) = *pick(&mut self.rng, people, "roster")?;
                let age_ms = self.rng.gen_range(0..MS_PER_DAY * ACTIVITY_WINDOW_DAYS);
                Ok(Activity {
                    id: format!("act-{}", self.mint_id()),
                    action: action.to_string(),
                    user: ActivityUser {
                        name: name.to_string(),
                        role: title.to_string(),
                    },
                    timestamp: now - Duration::milliseconds(age_ms),
                    details: self
                        .rng
                        .gen_bool(0.5)
                        .then(|| ACTIVITY_DETAIL.to_string()),
                })
            })
            .collect()
    }

    /// Upcoming tasks due within the next fourteen days.
    pub fn tasks(&mut self, role: Role, count: usize, now: DateTime<Utc>) -> Result<Vec<Task>, AppError> {
        let titles = task_titles(role);
        let people = roster(role);
        (0..count)
            .map(|_| {
                let title = pick(&mut self.rng, titles, "task title")?;
                let lead_ms = self.rng.gen_range(0..MS_PER_DAY * DUE_WINDOW_DAYS);
                let status = *pick(&mut self.rng, &TaskStatus::ALL, "status")?;
                let assignee = if self.rng.gen_bool(0.7) {
                    Some(pick(&mut self.rng, people, "roster")?.0.to_string())
                } else {
                    None
                };
                let priority = *pick(&mut self.rng, &TaskPriority::ALL, "priority")?;
                Ok(Task {
                    id: format!("task-{}", self.mint_id()),
                    title: title.to_string(),
                    due_date: now + Duration::milliseconds(lead_ms),
                    status,
                    assignee,
                    priority,
                })
            })
            .collect()
    }

    fn mint_id(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T], what: &str) -> Result<&'a T, AppError> {
    items
        .choose(rng)
        .ok_or_else(|| AppError::generation(format!("empty {what} vocabulary")))
}
