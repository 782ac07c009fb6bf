use crate::common::{signed_in_portal, test_portal, TempDir};
use pretty_assertions::assert_eq;
use portal::flow::{LOGOUT_MESSAGE, WELCOME_DESCRIPTION};
use portal::{FileSessionStore, MockDashboardSource, NoLatency, Portal, RecordingNotifier};
use shared_types::{AppErrorKind, Role};
use std::sync::Arc;

#[test]
fn dashboard_requires_a_stored_role() {
    let portal = test_portal();
    let err = portal.dashboard().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthenticated);
}

#[tokio::test]
async fn dashboard_welcomes_by_role_name() {
    let portal = signed_in_portal("hod_sharma").await;

    let provider = portal.dashboard().unwrap();

    assert_eq!(provider.role(), Role::HeadOfDepartment);
    let recorded = portal.notifier().snapshot();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].title, "Logged in as Department Head");
    assert_eq!(recorded[0].description.as_deref(), Some(WELCOME_DESCRIPTION));
}

#[tokio::test]
async fn sign_out_then_dashboard_is_unauthenticated() {
    let portal = signed_in_portal("admin").await;

    portal.sign_out().unwrap();

    assert_eq!(portal.current_role(), None);
    assert_eq!(portal.notifier().titles(), vec![LOGOUT_MESSAGE]);
    assert_eq!(portal.dashboard().unwrap_err().kind, AppErrorKind::Unauthenticated);
}

#[tokio::test]
async fn role_persists_across_portals_sharing_a_session_dir() {
    let dir = TempDir::new();
    let first = Portal::new(
        FileSessionStore::open(dir.path()).unwrap(),
        MockDashboardSource::instant(),
        Arc::new(RecordingNotifier::new()),
        NoLatency,
    );
    first.sign_in("skills_admin", "pw").await.unwrap();

    let second = Portal::new(
        FileSessionStore::open(dir.path()).unwrap(),
        MockDashboardSource::instant(),
        Arc::new(RecordingNotifier::new()),
        NoLatency,
    );
    let provider = second.dashboard().unwrap();
    provider.load().await.unwrap();

    assert_eq!(provider.role(), Role::SubDepartmentAdmin);
    assert_eq!(provider.state().stats.map(|s| s.team_members), Some(28));
}
