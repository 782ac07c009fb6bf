use crate::data_source::DashboardDataSource;
use crate::notify::Notifier;
use shared_types::{AppError, DashboardStats, Department, Role};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data. Please try again.";
pub const LOAD_ERROR_NOTICE: &str = "Failed to load dashboard data";
pub const REFRESH_SUCCESS_NOTICE: &str = "Dashboard data refreshed";
pub const REFRESH_ERROR_NOTICE: &str = "Failed to refresh dashboard data";

/// What a dashboard view renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub stats: Option<DashboardStats>,
    pub departments: Vec<Department>,
    pub error: Option<String>,
}

impl DashboardState {
    fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Holds the current snapshot for one role and regenerates it on request.
///
/// Loads may overlap. Each load or refresh takes a ticket; a load that
/// finishes after a newer ticket was issued is discarded, so the most
/// recently requested snapshot always wins.
#[derive(Debug)]
pub struct DashboardProvider<S, N> {
    role: Role,
    source: S,
    notifier: N,
    state: Mutex<DashboardState>,
    latest_ticket: AtomicU64,
}

impl<S: DashboardDataSource, N: Notifier> DashboardProvider<S, N> {
    pub fn new(role: Role, source: S, notifier: N) -> Self {
        Self {
            role,
            source,
            notifier,
            state: Mutex::new(DashboardState::pending()),
            latest_ticket: AtomicU64::new(0),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.lock_state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Switch roles. The old snapshot is dropped and any load still in
    /// flight for the previous role will be ignored when it lands.
    pub fn set_role(&mut self, role: Role) {
        if role == self.role {
            return;
        }
        tracing::debug!(from = %self.role, to = %role, "dashboard role changed");
        self.role = role;
        self.issue_ticket();
        *self.lock_state() = DashboardState::pending();
    }

    /// Fetch a fresh snapshot through the data source's simulated round trip.
    #[tracing::instrument(skip(self), fields(role = %self.role))]
    pub async fn load(&self) -> Result<(), AppError> {
        let ticket = self.issue_ticket();
        self.lock_state().loading = true;

        let result = match self.source.load(self.role).await {
            Ok(stats) => self.source.departments().map(|departments| (stats, departments)),
            Err(err) => Err(err),
        };

        if !self.is_current(ticket) {
            tracing::debug!(ticket, "discarding superseded dashboard load");
            return Ok(());
        }

        match result {
            Ok((stats, departments)) => {
                let mut state = self.lock_state();
                state.stats = Some(stats);
                state.departments = departments;
                state.error = None;
                state.loading = false;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching dashboard data");
                {
                    let mut state = self.lock_state();
                    state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    state.loading = false;
                }
                self.notifier.error(LOAD_ERROR_NOTICE);
                Err(err)
            }
        }
    }

    /// Regenerate immediately, with no artificial delay.
    #[tracing::instrument(skip(self), fields(role = %self.role))]
    pub fn refresh(&self) -> Result<(), AppError> {
        self.issue_ticket();
        let result = self
            .source
            .refresh(self.role)
            .and_then(|stats| Ok((stats, self.source.departments()?)));

        match result {
            Ok((stats, departments)) => {
                {
                    let mut state = self.lock_state();
                    state.stats = Some(stats);
                    state.departments = departments;
                    state.error = None;
                    state.loading = false;
                }
                self.notifier.success(REFRESH_SUCCESS_NOTICE);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error refreshing dashboard data");
                self.lock_state().loading = false;
                self.notifier.error(REFRESH_ERROR_NOTICE);
                Err(err)
            }
        }
    }

    fn issue_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
