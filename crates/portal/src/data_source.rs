use crate::latency::{Latency, NoLatency};
use crate::mock::{self, MockGenerator};
use chrono::Utc;
use rand::rngs::StdRng;
use shared_types::{AppError, DashboardStats, Department, Role};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Default delay before a dashboard load resolves.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Anything that can produce dashboard snapshots for a role.
///
/// The mock generator is one implementation; a real backend would be another,
/// and consumers never need to know which one they hold.
#[allow(async_fn_in_trait)]
pub trait DashboardDataSource {
    /// Fetch a snapshot, possibly after a simulated or real round trip.
    async fn load(&self, role: Role) -> Result<DashboardStats, AppError>;

    /// Produce a snapshot immediately.
    fn refresh(&self, role: Role) -> Result<DashboardStats, AppError>;

    fn departments(&self) -> Result<Vec<Department>, AppError>;
}

impl<T: DashboardDataSource + ?Sized> DashboardDataSource for Arc<T> {
    async fn load(&self, role: Role) -> Result<DashboardStats, AppError> {
        (**self).load(role).await
    }

    fn refresh(&self, role: Role) -> Result<DashboardStats, AppError> {
        (**self).refresh(role)
    }

    fn departments(&self) -> Result<Vec<Department>, AppError> {
        (**self).departments()
    }
}

/// Randomized stand-in for a dashboard backend.
#[derive(Debug)]
pub struct MockDashboardSource<L = NoLatency> {
    generator: Mutex<MockGenerator<StdRng>>,
    latency: L,
    delay: Duration,
}

impl MockDashboardSource<NoLatency> {
    /// Source without any artificial delay.
    pub fn instant() -> Self {
        Self::new(NoLatency)
    }
}

impl<L: Latency> MockDashboardSource<L> {
    pub fn new(latency: L) -> Self {
        Self {
            generator: Mutex::new(MockGenerator::from_entropy()),
            latency,
            delay: DEFAULT_LOAD_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the entropy-seeded generator with a deterministic one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator = Mutex::new(MockGenerator::seeded(seed));
        self
    }

    fn generate(&self, role: Role) -> Result<DashboardStats, AppError> {
        let stats = self
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats(role, Utc::now())?;
        tracing::debug!(
            role = %role,
            total_tasks = stats.total_tasks,
            completed_tasks = stats.completed_tasks,
            "generated mock snapshot"
        );
        Ok(stats)
    }
}

impl<L: Latency> DashboardDataSource for MockDashboardSource<L> {
    async fn load(&self, role: Role) -> Result<DashboardStats, AppError> {
        self.latency.pause(self.delay).await;
        self.generate(role)
    }

    fn refresh(&self, role: Role) -> Result<DashboardStats, AppError> {
        self.generate(role)
    }

    fn departments(&self) -> Result<Vec<Department>, AppError> {
        Ok(mock::departments())
    }
}
