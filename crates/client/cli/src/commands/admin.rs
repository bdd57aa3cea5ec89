//! Admin dashboard commands.
//!
//! Every action logs in first against the configured credentials. Mutations
//! print the refreshed dashboard that the runtime returns with them.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser};
use console::style;
use registry_core::{EventDraft, EventId};
use runtime::{AdminDashboard, DashboardSnapshot, Registry};

use super::{confirm, prompt};
use crate::render::format_date;

/// Admin dashboard (requires credentials)
#[derive(Parser, Debug)]
pub struct Admin {
    /// Admin email (prompted if omitted)
    #[arg(long)]
    email: Option<String>,

    #[command(subcommand)]
    action: AdminAction,
}

#[derive(Parser, Debug)]
enum AdminAction {
    /// Totals and the events table
    Dashboard,

    /// Add a new event
    Create(CreateEvent),

    /// Edit an existing event; omitted fields keep their values
    Update(UpdateEvent),

    /// Delete an event (registrations are kept)
    Delete {
        #[arg(value_name = "ID")]
        id: EventId,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Registration log, optionally for one event
    Registrations {
        #[arg(long, value_name = "ID")]
        event: Option<EventId>,
    },

    /// Volunteer signups
    Volunteers,

    /// Newsletter subscribers
    Subscribers,

    /// Remove every stored collection
    Reset {
        /// Skip confirmation prompt (dangerous!)
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct CreateEvent {
    #[arg(long)]
    title: String,

    /// Date as YYYY-MM-DD
    #[arg(long)]
    date: NaiveDate,

    #[arg(long)]
    time: Option<String>,

    #[arg(long, default_value = "")]
    location: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    image: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// Maximum attendees; 0 or omitted means unlimited
    #[arg(long)]
    capacity: Option<u32>,
}

impl From<CreateEvent> for EventDraft {
    fn from(args: CreateEvent) -> Self {
        EventDraft {
            time: args.time,
            location: args.location,
            description: args.description,
            image: args.image,
            category: args.category,
            capacity: args.capacity,
            ..EventDraft::new(args.title, args.date)
        }
    }
}

#[derive(Args, Debug)]
struct UpdateEvent {
    #[arg(value_name = "ID")]
    id: EventId,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    date: Option<NaiveDate>,

    /// Pass an empty value to clear
    #[arg(long)]
    time: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Pass an empty value to clear
    #[arg(long)]
    image: Option<String>,

    /// Pass an empty value to clear
    #[arg(long)]
    category: Option<String>,

    /// 0 means unlimited
    #[arg(long)]
    capacity: Option<u32>,

    /// Replace the registrant list (comma separated emails)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    registered: Option<Vec<String>>,
}

impl UpdateEvent {
    fn apply(self, mut draft: EventDraft) -> EventDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(time) = self.time {
            draft.time = Some(time);
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(image) = self.image {
            draft.image = Some(image);
        }
        if let Some(category) = self.category {
            draft.category = Some(category);
        }
        if let Some(capacity) = self.capacity {
            draft.capacity = Some(capacity);
        }
        if self.registered.is_some() {
            draft.registered = self.registered;
        }
        draft
    }
}

impl Admin {
    pub fn execute(self, registry: &Registry) -> Result<()> {
        let email = match self.email {
            Some(email) => email,
            None => prompt("Admin email:")?,
        };
        let password =
            rpassword::prompt_password("Password: ").context("Failed to read password")?;

        let session = registry.admin_login(&email, &password)?;
        let dashboard = session.dashboard(registry);

        match self.action {
            AdminAction::Dashboard => print_snapshot(&dashboard.snapshot()),
            AdminAction::Create(args) => {
                let (event, snapshot) = dashboard.create_event(args.into())?;
                println!("{} Created event {}", style("✓").green().bold(), event.id);
                print_snapshot(&snapshot);
            }
            AdminAction::Update(args) => {
                let id = args.id;
                let draft = dashboard
                    .open_editor(id)
                    .with_context(|| format!("Event {} not found", id))?;
                let (event, snapshot) = dashboard.update_event(id, args.apply(draft))?;
                println!("{} Updated event {}", style("✓").green().bold(), event.id);
                print_snapshot(&snapshot);
            }
            AdminAction::Delete { id, yes } => delete(&dashboard, id, yes)?,
            AdminAction::Registrations { event } => {
                let registrations = dashboard.registrations();
                for registration in registrations
                    .iter()
                    .filter(|r| event.is_none_or(|id| r.event_id == id))
                {
                    println!(
                        "{:>3}  {}  {}  {}  {}",
                        registration.event_id.0,
                        registration.name,
                        style(&registration.email).cyan(),
                        registration.phone.as_deref().unwrap_or("-"),
                        style(registration.timestamp.format("%Y-%m-%d %H:%M")).dim()
                    );
                }
            }
            AdminAction::Volunteers => {
                for signup in dashboard.volunteers() {
                    println!(
                        "{}  {}  {}  {}",
                        signup.name,
                        style(&signup.email).cyan(),
                        signup.skills,
                        signup.availability
                    );
                }
            }
            AdminAction::Subscribers => {
                for email in dashboard.subscribers() {
                    println!("{}", email);
                }
            }
            AdminAction::Reset { yes } => {
                if !yes && !confirm("Delete every stored collection?")? {
                    println!("{}", style("Cancelled").dim());
                } else {
                    let removed = registry.storage().clear_all();
                    println!(
                        "{} Removed {} collections",
                        style("✓").green().bold(),
                        removed
                    );
                }
            }
        }

        session.logout();
        Ok(())
    }
}

fn delete(dashboard: &AdminDashboard, id: EventId, yes: bool) -> Result<()> {
    let pending = dashboard
        .request_delete(id)
        .with_context(|| format!("Event {} not found", id))?;

    if !yes && !confirm(&format!("Delete '{}'?", pending.title()))? {
        println!("{}", style("Cancelled").dim());
        return Ok(());
    }

    let snapshot = dashboard.confirm_delete(pending);
    println!("{} Deleted event {}", style("✓").green().bold(), id);
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    let totals = snapshot.totals;
    println!(
        "{} {}  {} {}  {} {}  {} {}",
        style("Events:").bold().cyan(),
        totals.events,
        style("Registrations:").bold().cyan(),
        totals.registrations,
        style("Subscribers:").bold().cyan(),
        totals.subscribers,
        style("Volunteers:").bold().cyan(),
        totals.volunteers,
    );
    println!();

    for row in &snapshot.rows {
        println!(
            "{:>3}  {}  {}  {}  {}  cap {}  {} registered",
            row.id.0,
            style(&row.title).bold(),
            format_date(row.date),
            row.time_label,
            row.location,
            row.capacity_label,
            row.registrant_count
        );
    }
}
