//! Newsletter subscriptions and volunteer signups.

use chrono::Utc;
use registry_core::{
    Field, ValidationError, VolunteerForm, VolunteerSignup, is_valid_email, normalize_email,
};

use crate::api::Result;
use crate::repository::{NewsletterList, VolunteerLog};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

#[derive(Clone)]
pub struct SignupService {
    newsletter: NewsletterList,
    volunteers: VolunteerLog,
}

impl SignupService {
    pub fn new(newsletter: NewsletterList, volunteers: VolunteerLog) -> Self {
        Self {
            newsletter,
            volunteers,
        }
    }

    /// Subscribe an email to the newsletter. Re-subscribing is not an error.
    pub fn subscribe_newsletter(&self, email: &str) -> Result<SubscribeOutcome> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::MissingField(Field::Email).into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email).into());
        }

        match self.newsletter.insert(&email) {
            Some(_) => {
                tracing::info!("Newsletter subscription added: {}", email);
                Ok(SubscribeOutcome::Subscribed)
            }
            None => {
                tracing::debug!("Newsletter subscription already present: {}", email);
                Ok(SubscribeOutcome::AlreadySubscribed)
            }
        }
    }

    pub fn sign_up_volunteer(&self, form: VolunteerForm) -> Result<VolunteerSignup> {
        let signup = form.into_signup(Utc::now())?;
        self.volunteers.append(&signup);
        tracing::info!("Volunteer signup recorded: {}", signup.email);
        Ok(signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistryError;
    use crate::store::Storage;

    fn service(storage: &Storage) -> SignupService {
        SignupService::new(
            NewsletterList::new(storage.clone()),
            VolunteerLog::new(storage.clone()),
        )
    }

    #[test]
    fn subscribe_normalizes_and_dedups() {
        let storage = Storage::in_memory();
        let service = service(&storage);

        assert_eq!(
            service.subscribe_newsletter("  Ann@Example.com ").unwrap(),
            SubscribeOutcome::Subscribed
        );
        assert_eq!(
            service.subscribe_newsletter("ann@example.COM").unwrap(),
            SubscribeOutcome::AlreadySubscribed
        );
        assert_eq!(
            NewsletterList::new(storage).list(),
            vec!["ann@example.com".to_string()]
        );
    }

    #[test]
    fn subscribe_rejects_bad_email() {
        let storage = Storage::in_memory();
        let service = service(&storage);

        assert!(matches!(
            service.subscribe_newsletter("   "),
            Err(RegistryError::Validation(ValidationError::MissingField(Field::Email)))
        ));
        assert!(matches!(
            service.subscribe_newsletter("not-an-email"),
            Err(RegistryError::Validation(ValidationError::InvalidEmail(_)))
        ));
        assert!(NewsletterList::new(storage).is_empty());
    }

    #[test]
    fn volunteer_signup_appends() {
        let storage = Storage::in_memory();
        let service = service(&storage);
        let form = VolunteerForm {
            name: "Bo".into(),
            email: "Bo@Example.org".into(),
            availability: "Saturdays".into(),
            ..VolunteerForm::default()
        };

        let signup = service.sign_up_volunteer(form.clone()).unwrap();
        service.sign_up_volunteer(form).unwrap();

        assert_eq!(signup.email, "bo@example.org");
        assert_eq!(VolunteerLog::new(storage).len(), 2);
    }

    #[test]
    fn volunteer_signup_requires_name() {
        let storage = Storage::in_memory();
        let form = VolunteerForm {
            email: "bo@example.org".into(),
            ..VolunteerForm::default()
        };

        assert!(service(&storage).sign_up_volunteer(form).is_err());
        assert!(VolunteerLog::new(storage).is_empty());
    }
}
