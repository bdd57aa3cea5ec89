//! Admin surface: login gate and the synchronized dashboard.
//!
//! A [`AdminDashboard`] can only be obtained from an [`AdminSession`], which
//! in turn only comes out of [`AdminGate::login`]. Credential checking itself
//! is delegated to a pluggable [`Authenticator`].

mod auth;
mod dashboard;

pub use auth::{AdminGate, AdminSession, Authenticator, StaticCredentials};
pub use dashboard::{AdminDashboard, AdminEventRow, DashboardSnapshot, PendingDelete, Totals};
