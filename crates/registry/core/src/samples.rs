//! Bootstrap sample set written on first run.

use chrono::NaiveDate;

use crate::event::{Event, EventId};

struct Sample {
    id: u64,
    title: &'static str,
    date: (i32, u32, u32),
    time: &'static str,
    location: &'static str,
    description: &'static str,
    image: &'static str,
    category: &'static str,
    capacity: u32,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        id: 1,
        title: "Spring Community Fair",
        date: (2025, 4, 15),
        time: "10:00",
        location: "Central Park",
        description: "Annual fair with food, games, and local vendors.",
        image: "assets/event1.jpg",
        category: "Festival",
        capacity: 200,
    },
    Sample {
        id: 2,
        title: "Volunteer Tree Planting",
        date: (2025, 3, 22),
        time: "09:00",
        location: "Riverside Park",
        description: "Help plant 100 trees to beautify our community.",
        image: "assets/event2.jpg",
        category: "Environment",
        capacity: 50,
    },
    Sample {
        id: 3,
        title: "Senior Tech Workshop",
        date: (2025, 3, 10),
        time: "14:00",
        location: "Community Center",
        description: "Learn smartphone basics in a friendly setting.",
        image: "assets/event3.jpg",
        category: "Education",
        capacity: 30,
    },
];

/// The fixed sample events (ids 1-3), each with no registrants.
pub fn sample_events() -> Vec<Event> {
    SAMPLES
        .iter()
        .filter_map(|sample| {
            let (y, m, d) = sample.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Event {
                id: EventId(sample.id),
                title: sample.title.to_string(),
                date,
                time: Some(sample.time.to_string()),
                location: sample.location.to_string(),
                description: sample.description.to_string(),
                image: Some(sample.image.to_string()),
                category: Some(sample.category.to_string()),
                capacity: Some(sample.capacity),
                registered: Vec::new(),
            })
        })
        .collect()
}
