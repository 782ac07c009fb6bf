pub mod auth;
pub mod data_source;
pub mod flow;
pub mod latency;
pub mod mock;
pub mod notify;
pub mod provider;
pub mod session;
pub mod views;

#[cfg(feature = "native")]
pub mod config;

#[cfg(feature = "native")]
pub mod telemetry;

pub use auth::{classify_role, RoleResolver};
pub use data_source::{DashboardDataSource, MockDashboardSource};
pub use flow::Portal;
pub use latency::{Latency, NoLatency};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use provider::{DashboardProvider, DashboardState};
pub use session::{MemorySessionStore, SessionStore, ROLE_KEY};

#[cfg(feature = "native")]
pub use latency::TokioLatency;

#[cfg(feature = "native")]
pub use session::FileSessionStore;
