pub mod config;
pub mod error;
pub mod schedule;
pub mod types;
pub mod walkthrough;

pub use config::parse_site_toml;
pub use error::{Error, Result};
pub use schedule::{
    ALL_LOCATIONS, Category, ProgramEntry, ScheduleDocument, TimeSlotGroup, group_by_time,
    load_schedule_value,
};
pub use types::*;
pub use walkthrough::{WalkthroughCard, WalkthroughInfo, load_walkthrough};
