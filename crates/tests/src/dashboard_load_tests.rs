use crate::common::signed_in_portal;
use pretty_assertions::assert_eq;
use portal::mock::{ACTIVITY_COUNT, UPCOMING_TASK_COUNT};
use portal::provider::{LOAD_ERROR_MESSAGE, LOAD_ERROR_NOTICE};
use portal::{DashboardDataSource, DashboardProvider, MockDashboardSource, RecordingNotifier, TokioLatency};
use shared_types::{AppError, DashboardStats, Department, Role};
use std::time::Duration;

fn assert_consistent(stats: &DashboardStats) {
    assert_eq!(stats.completed_tasks + stats.pending_tasks, stats.total_tasks);
    assert!(stats.completed_tasks <= stats.total_tasks);
    assert!(stats.department_progress <= 100);
    assert_eq!(stats.recent_activity.len(), ACTIVITY_COUNT);
    assert_eq!(stats.upcoming_tasks.len(), UPCOMING_TASK_COUNT);
}

#[tokio::test]
async fn sub_department_admin_snapshot_matches_role_constants() {
    let portal = signed_in_portal("admin").await;
    let provider = portal.dashboard().unwrap();

    provider.load().await.unwrap();

    let stats = provider.state().stats.unwrap();
    assert_eq!(stats.team_members, 28);
    assert!((150..200).contains(&stats.total_tasks), "total {}", stats.total_tasks);
    assert_consistent(&stats);
}

#[tokio::test]
async fn hod_snapshot_is_the_largest() {
    let portal = signed_in_portal("hod").await;
    let provider = portal.dashboard().unwrap();

    provider.load().await.unwrap();

    let state = provider.state();
    let stats = state.stats.unwrap();
    assert_eq!(stats.team_members, 87);
    assert!((187..237).contains(&stats.total_tasks), "total {}", stats.total_tasks);
    assert_eq!(state.departments.len(), 4);
    assert_consistent(&stats);
}

#[tokio::test]
async fn team_member_snapshot_is_consistent_across_many_loads() {
    let portal = signed_in_portal("someone").await;
    let provider = portal.dashboard().unwrap();

    for _ in 0..50 {
        provider.load().await.unwrap();
        let stats = provider.state().stats.unwrap();
        assert_eq!(stats.team_members, 12);
        assert!((125..175).contains(&stats.total_tasks));
        assert_consistent(&stats);
    }
}

#[tokio::test]
async fn provider_starts_loading_until_first_load() {
    let portal = signed_in_portal("someone").await;
    let provider = portal.dashboard().unwrap();

    assert!(provider.is_loading());
    provider.load().await.unwrap();
    assert!(!provider.is_loading());
}

#[tokio::test(start_paused = true)]
async fn load_waits_for_simulated_round_trip() {
    let source = MockDashboardSource::new(TokioLatency).with_delay(Duration::from_millis(1000));
    let provider = DashboardProvider::new(Role::TeamMember, source, RecordingNotifier::new());
    let started = tokio::time::Instant::now();

    provider.load().await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
}

struct OfflineSource;

impl DashboardDataSource for OfflineSource {
    async fn load(&self, _role: Role) -> Result<DashboardStats, AppError> {
        Err(AppError::generation("generator offline"))
    }

    fn refresh(&self, _role: Role) -> Result<DashboardStats, AppError> {
        Err(AppError::generation("generator offline"))
    }

    fn departments(&self) -> Result<Vec<Department>, AppError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn failed_load_surfaces_message_and_toast() {
    let notifier = RecordingNotifier::new();
    let provider = DashboardProvider::new(Role::HeadOfDepartment, OfflineSource, &notifier);

    assert!(provider.load().await.is_err());

    let state = provider.state();
    assert!(!state.loading);
    assert_eq!(state.stats, None);
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(notifier.titles(), vec![LOAD_ERROR_NOTICE]);
}
