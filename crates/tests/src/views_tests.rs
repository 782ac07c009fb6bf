use crate::common::signed_in_portal;
use pretty_assertions::assert_eq;
use portal::views::{export_snapshot, summarize, EXPORT_SUCCESS_MESSAGE};
use shared_types::{DashboardStats, Role};

#[tokio::test]
async fn each_role_gets_its_own_heading_and_tiles() {
    for (username, role, heading, tiles) in [
        ("hod", Role::HeadOfDepartment, "Department Overview", 4),
        ("admin", Role::SubDepartmentAdmin, "Sub-department Dashboard", 4),
        ("member", Role::TeamMember, "My Dashboard", 3),
    ] {
        let portal = signed_in_portal(username).await;
        let provider = portal.dashboard().unwrap();
        provider.load().await.unwrap();
        let state = provider.state();

        let view = summarize(role, state.stats.as_ref().unwrap(), &state.departments);

        assert_eq!(view.role, role);
        assert_eq!(view.heading, heading);
        assert_eq!(view.tiles.len(), tiles);
        assert_eq!(view.can_export, role == Role::HeadOfDepartment);
    }
}

#[tokio::test]
async fn hod_tiles_reflect_snapshot() {
    let portal = signed_in_portal("hod").await;
    let provider = portal.dashboard().unwrap();
    provider.load().await.unwrap();
    let state = provider.state();
    let stats = state.stats.as_ref().unwrap();

    let view = summarize(Role::HeadOfDepartment, stats, &state.departments);

    let values: Vec<&str> = view.tiles.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "4".to_string(),
            stats.team_members.to_string(),
            stats.pending_tasks.to_string(),
            stats.completed_tasks.to_string(),
        ]
    );
}

#[tokio::test]
async fn export_round_trips_the_snapshot() {
    let portal = signed_in_portal("hod").await;
    let provider = portal.dashboard().unwrap();
    provider.load().await.unwrap();
    portal.notifier().take();
    let state = provider.state();
    let stats = state.stats.unwrap();

    let json = export_snapshot(&stats, &state.departments, portal.notifier()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let exported: DashboardStats = serde_json::from_value(parsed["stats"].clone()).unwrap();
    assert_eq!(exported, stats);
    assert_eq!(portal.notifier().titles(), vec![EXPORT_SUCCESS_MESSAGE]);
}
