//! Services that validate user input and write to several collections.

mod accessibility;
mod registration;
mod signup;

pub use accessibility::{AccessibilityService, ThemeApplier};
pub use registration::{RegistrationReceipt, RegistrationService};
pub use signup::{SignupService, SubscribeOutcome};
