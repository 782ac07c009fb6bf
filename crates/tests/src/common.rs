use portal::{MemorySessionStore, MockDashboardSource, NoLatency, Portal, RecordingNotifier};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Portal with in-memory session storage, no artificial delays and a
/// notifier the test can inspect.
pub type TestPortal = Portal<MemorySessionStore, MockDashboardSource, Arc<RecordingNotifier>, NoLatency>;

pub fn test_portal() -> TestPortal {
    Portal::new(
        MemorySessionStore::new(),
        MockDashboardSource::instant(),
        Arc::new(RecordingNotifier::new()),
        NoLatency,
    )
}

/// Same as `test_portal` but with a reproducible generator.
pub fn seeded_portal(seed: u64) -> TestPortal {
    Portal::new(
        MemorySessionStore::new(),
        MockDashboardSource::instant().with_seed(seed),
        Arc::new(RecordingNotifier::new()),
        NoLatency,
    )
}

/// Sign in and drop the sign-in notifications so assertions start clean.
pub async fn signed_in_portal(username: &str) -> TestPortal {
    let portal = test_portal();
    portal
        .sign_in(username, "secret")
        .await
        .expect("sign in should succeed for a non-empty pair");
    portal.notifier().take();
    portal
}

/// Scratch directory removed when dropped.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("dms-tests-{}", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
