use crate::latency::Latency;
use crate::notify::Notifier;
use crate::session::SessionStore;
use shared_types::{AppError, Role, SignInRequest};
use std::time::Duration;
use validator::Validate;

/// Default delay before a sign-in attempt resolves.
pub const DEFAULT_SIGN_IN_DELAY: Duration = Duration::from_millis(1000);

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const LOGIN_FAILURE_MESSAGE: &str = "Login failed. Please try again.";

/// Map a username to a role by substring. Nothing is verified.
///
/// "hod" wins over "admin" when both appear.
pub fn classify_role(identifier: &str) -> Role {
    let lowered = identifier.to_lowercase();
    if lowered.contains("hod") {
        Role::HeadOfDepartment
    } else if lowered.contains("admin") {
        Role::SubDepartmentAdmin
    } else {
        Role::TeamMember
    }
}

/// Resolves a sign-in form submission into a session role.
#[derive(Debug, Clone)]
pub struct RoleResolver<L> {
    latency: L,
    delay: Duration,
}

impl<L: Latency> RoleResolver<L> {
    pub fn new(latency: L) -> Self {
        Self {
            latency,
            delay: DEFAULT_SIGN_IN_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Validate, wait out the simulated round trip, classify and persist.
    ///
    /// The persisted role is only written on the success path; a validation
    /// or storage failure leaves whatever was stored before untouched.
    #[tracing::instrument(skip(self, request, session, notifier), fields(username = %request.username))]
    pub async fn sign_in<S, N>(
        &self,
        request: &SignInRequest,
        session: &S,
        notifier: &N,
    ) -> Result<Role, AppError>
    where
        S: SessionStore + ?Sized,
        N: Notifier + ?Sized,
    {
        if let Err(errors) = request.validate() {
            let err = AppError::from(errors);
            notifier.error(&err.message);
            return Err(err);
        }

        self.latency.pause(self.delay).await;

        let role = classify_role(&request.username);
        if let Err(err) = session.set_role(role) {
            tracing::error!(error = %err, "failed to persist session role");
            notifier.error(LOGIN_FAILURE_MESSAGE);
            return Err(err);
        }

        tracing::info!(role = %role, "signed in");
        notifier.success(LOGIN_SUCCESS_MESSAGE);
        Ok(role)
    }
}
