use crate::common::{seeded_portal, signed_in_portal};
use pretty_assertions::assert_eq;
use portal::provider::REFRESH_SUCCESS_NOTICE;
use std::collections::HashSet;

#[tokio::test]
async fn refresh_mints_a_disjoint_id_set() {
    let portal = signed_in_portal("hod").await;
    let provider = portal.dashboard().unwrap();
    provider.load().await.unwrap();
    let before = provider.state().stats.unwrap();

    provider.refresh().unwrap();

    let after = provider.state().stats.unwrap();
    let old: HashSet<String> = before.entity_ids().into_iter().map(String::from).collect();
    let new: HashSet<String> = after.entity_ids().into_iter().map(String::from).collect();
    assert!(old.is_disjoint(&new));
    assert_eq!(new.len(), before.entity_ids().len());
}

#[tokio::test]
async fn refresh_without_prior_load_fills_state() {
    let portal = signed_in_portal("admin").await;
    let provider = portal.dashboard().unwrap();

    provider.refresh().unwrap();

    let state = provider.state();
    assert!(!state.loading);
    assert_eq!(state.stats.map(|s| s.team_members), Some(28));
    assert_eq!(state.departments.len(), 4);
}

#[tokio::test]
async fn refresh_announces_success_each_time() {
    let portal = signed_in_portal("someone").await;
    let provider = portal.dashboard().unwrap();
    portal.notifier().take();

    provider.refresh().unwrap();
    provider.refresh().unwrap();

    assert_eq!(portal.notifier().titles(), vec![REFRESH_SUCCESS_NOTICE, REFRESH_SUCCESS_NOTICE]);
}

#[tokio::test]
async fn ids_carry_entity_prefixes() {
    let portal = seeded_portal(7);
    portal.sign_in("someone", "pw").await.unwrap();
    let provider = portal.dashboard().unwrap();

    provider.refresh().unwrap();

    let stats = provider.state().stats.unwrap();
    assert!(stats.recent_activity.iter().all(|a| a.id.starts_with("act-")));
    assert!(stats.upcoming_tasks.iter().all(|t| t.id.starts_with("task-")));
}
