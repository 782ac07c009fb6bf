use crate::auth::RoleResolver;
use crate::data_source::DashboardDataSource;
use crate::latency::Latency;
use crate::notify::Notifier;
use crate::provider::DashboardProvider;
use crate::session::SessionStore;
use shared_types::{AppError, Notification, Role, SignInRequest};
use std::sync::Arc;
use std::time::Duration;

pub const WELCOME_DESCRIPTION: &str = "Welcome to your department dashboard";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Sign-in, dashboard and sign-out wired together over one session store.
///
/// Hosts (the web shell, the demo binary, tests) hold a `Portal` and never
/// touch the resolver or the data source directly.
#[derive(Debug)]
pub struct Portal<S, D, N, L> {
    session: S,
    resolver: RoleResolver<L>,
    source: Arc<D>,
    notifier: N,
}

impl<S, D, N, L> Portal<S, D, N, L>
where
    S: SessionStore,
    D: DashboardDataSource,
    N: Notifier,
    L: Latency,
{
    pub fn new(session: S, source: D, notifier: N, latency: L) -> Self {
        Self {
            session,
            resolver: RoleResolver::new(latency),
            source: Arc::new(source),
            notifier,
        }
    }

    pub fn with_sign_in_delay(mut self, delay: Duration) -> Self {
        self.resolver = self.resolver.with_delay(delay);
        self
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Role, AppError> {
        let request = SignInRequest::new(username, password);
        self.resolver
            .sign_in(&request, &self.session, &self.notifier)
            .await
    }

    pub fn current_role(&self) -> Option<Role> {
        self.session.get_role()
    }

    /// Clear the stored role. Signing out twice is harmless.
    pub fn sign_out(&self) -> Result<(), AppError> {
        self.session.clear_role()?;
        tracing::info!("signed out");
        self.notifier.success(LOGOUT_MESSAGE);
        Ok(())
    }
}

impl<S, D, N, L> Portal<S, D, N, L>
where
    S: SessionStore,
    D: DashboardDataSource,
    N: Notifier + Clone,
    L: Latency,
{
    /// Provider for the stored role. Without one the host should go back
    /// to the sign-in page.
    pub fn dashboard(&self) -> Result<DashboardProvider<Arc<D>, N>, AppError> {
        let role = self
            .current_role()
            .ok_or_else(|| AppError::unauthenticated("No active session. Please sign in."))?;

        self.notifier.notify(
            Notification::success(format!("Logged in as {}", role.display_name()))
                .with_description(WELCOME_DESCRIPTION),
        );
        Ok(DashboardProvider::new(
            role,
            Arc::clone(&self.source),
            self.notifier.clone(),
        ))
    }
}
