//! Pluggable admin authentication.

use std::fmt;

use crate::api::{RegistryError, Result};
use crate::config::RegistryConfig;
use crate::registry::Registry;

use super::AdminDashboard;

/// Decides whether a credential pair grants admin access.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, email: &str, password: &str) -> bool;
}

/// Single credential pair supplied by configuration.
///
/// With no credentials configured every login is rejected.
#[derive(Clone, Default)]
pub struct StaticCredentials {
    email: Option<String>,
    password: Option<String>,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Rejects every login.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, email: &str, password: &str) -> bool {
        match (&self.email, &self.password) {
            (Some(expected_email), Some(expected_password)) => {
                email.trim() == expected_email && password == expected_password
            }
            _ => false,
        }
    }
}

/// Entry point to the admin surface.
pub struct AdminGate;

impl AdminGate {
    pub fn login(
        authenticator: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> Result<AdminSession> {
        if !authenticator.authenticate(email, password) {
            tracing::warn!("Rejected admin login for '{}'", email.trim());
            return Err(RegistryError::Unauthorized);
        }

        tracing::info!("Admin logged in: {}", email.trim());
        Ok(AdminSession {
            email: email.trim().to_string(),
        })
    }
}

/// Proof of a successful admin login.
#[derive(Debug)]
pub struct AdminSession {
    email: String,
}

impl AdminSession {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn dashboard(&self, registry: &Registry) -> AdminDashboard {
        AdminDashboard::new(registry)
    }

    pub fn logout(self) {
        tracing::info!("Admin logged out: {}", self.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credentials_match_exactly() {
        let creds = StaticCredentials::new("admin@community.org", "s3cret");

        assert!(creds.authenticate(" admin@community.org ", "s3cret"));
        assert!(!creds.authenticate("admin@community.org", "S3cret"));
        assert!(!creds.authenticate("other@community.org", "s3cret"));
    }

    #[test]
    fn disabled_credentials_reject_everything() {
        let creds = StaticCredentials::disabled();
        assert!(!creds.is_configured());
        assert!(!creds.authenticate("", ""));
    }

    #[test]
    fn gate_returns_session_or_unauthorized() {
        let creds = StaticCredentials::new("a@b.co", "pw");

        let session = AdminGate::login(&creds, "a@b.co", "pw").unwrap();
        assert_eq!(session.email(), "a@b.co");
        session.logout();

        assert!(matches!(
            AdminGate::login(&creds, "a@b.co", "nope"),
            Err(RegistryError::Unauthorized)
        ));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = StaticCredentials::new("a@b.co", "pw");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("\"pw\""));
    }

    #[test]
    fn custom_authenticators_plug_in() {
        struct AllowAll;
        impl Authenticator for AllowAll {
            fn authenticate(&self, _: &str, _: &str) -> bool {
                true
            }
        }

        assert!(AdminGate::login(&AllowAll, "anyone", "").is_ok());
    }
}
