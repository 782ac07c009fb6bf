use crate::common::test_portal;
use pretty_assertions::assert_eq;
use portal::auth::{LOGIN_FAILURE_MESSAGE, LOGIN_SUCCESS_MESSAGE};
use portal::SessionStore;
use shared_types::{AppErrorKind, NotificationLevel, Role, MISSING_CREDENTIALS_MESSAGE};

#[tokio::test]
async fn hod_username_resolves_to_department_head() {
    let portal = test_portal();

    let role = portal.sign_in("hod_sharma", "x").await.unwrap();

    assert_eq!(role, Role::HeadOfDepartment);
    assert_eq!(portal.current_role(), Some(Role::HeadOfDepartment));
    let recorded = portal.notifier().snapshot();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].level, NotificationLevel::Success);
    assert_eq!(recorded[0].title, LOGIN_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn hod_match_ignores_case() {
    let portal = test_portal();
    assert_eq!(portal.sign_in("Dept.HOD", "pw").await.unwrap(), Role::HeadOfDepartment);
}

#[tokio::test]
async fn admin_without_hod_resolves_to_sub_department_admin() {
    let portal = test_portal();
    assert_eq!(portal.sign_in("Training-Admin", "pw").await.unwrap(), Role::SubDepartmentAdmin);
}

#[tokio::test]
async fn hod_wins_over_admin() {
    let portal = test_portal();
    assert_eq!(portal.sign_in("hod_admin", "pw").await.unwrap(), Role::HeadOfDepartment);
}

#[tokio::test]
async fn anything_else_is_a_team_member() {
    let portal = test_portal();
    assert_eq!(portal.sign_in("priya.k", "pw").await.unwrap(), Role::TeamMember);
}

#[tokio::test]
async fn empty_username_is_rejected_and_nothing_is_stored() {
    let portal = test_portal();

    let err = portal.sign_in("", "x").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, MISSING_CREDENTIALS_MESSAGE);
    assert_eq!(portal.session().get_role(), None);
    assert_eq!(portal.notifier().titles(), vec![MISSING_CREDENTIALS_MESSAGE]);
}

#[tokio::test]
async fn empty_password_is_rejected() {
    let portal = test_portal();
    let err = portal.sign_in("hod", "").await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.field_errors.contains_key("password"));
}

#[tokio::test]
async fn rejected_attempt_keeps_earlier_role() {
    let portal = test_portal();
    portal.sign_in("team_admin", "pw").await.unwrap();

    assert!(portal.sign_in("", "").await.is_err());

    assert_eq!(portal.current_role(), Some(Role::SubDepartmentAdmin));
}

#[tokio::test]
async fn second_sign_in_replaces_role() {
    let portal = test_portal();
    portal.sign_in("hod", "pw").await.unwrap();
    portal.sign_in("someone", "pw").await.unwrap();
    assert_eq!(portal.current_role(), Some(Role::TeamMember));
}

#[tokio::test(start_paused = true)]
async fn sign_in_waits_for_configured_delay() {
    use portal::{MemorySessionStore, MockDashboardSource, Portal, RecordingNotifier, TokioLatency};
    use std::time::Duration;

    let portal = Portal::new(
        MemorySessionStore::new(),
        MockDashboardSource::instant(),
        RecordingNotifier::new(),
        TokioLatency,
    )
    .with_sign_in_delay(Duration::from_millis(750));
    let started = tokio::time::Instant::now();

    portal.sign_in("admin", "pw").await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(750));
    assert!(!portal.notifier().titles().contains(&LOGIN_FAILURE_MESSAGE.to_string()));
}
