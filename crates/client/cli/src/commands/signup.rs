use anyhow::Result;
use clap::Parser;
use console::style;
use registry_core::VolunteerForm;
use runtime::{Registry, SubscribeOutcome};

/// Subscribe to the newsletter
#[derive(Parser, Debug)]
pub struct Subscribe {
    #[arg(value_name = "EMAIL")]
    email: String,
}

impl Subscribe {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        match registry.signups().subscribe_newsletter(&self.email)? {
            SubscribeOutcome::Subscribed => {
                println!("{} Thanks for subscribing!", style("✓").green().bold());
            }
            SubscribeOutcome::AlreadySubscribed => {
                println!("{}", style("You're already subscribed.").dim());
            }
        }
        Ok(())
    }
}

/// Sign up as a volunteer
#[derive(Parser, Debug)]
pub struct Volunteer {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    /// Skills you can offer
    #[arg(long, default_value = "")]
    skills: String,

    /// When you are available
    #[arg(long, default_value = "")]
    availability: String,
}

impl Volunteer {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let form = VolunteerForm {
            name: self.name,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            availability: self.availability,
        };

        let signup = registry.signups().sign_up_volunteer(form)?;
        println!(
            "{} Thank you for volunteering, {}! We'll be in touch at {}.",
            style("✓").green().bold(),
            signup.name,
            style(&signup.email).cyan()
        );
        Ok(())
    }
}
