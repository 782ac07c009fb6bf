pub mod config;
pub mod error;
pub mod notification;
pub mod requests;

// Departmental dashboard domain
pub mod dashboard;
pub mod role;

pub use config::*;
pub use error::*;
pub use notification::*;
pub use requests::*;

pub use dashboard::*;
pub use role::*;
