pub mod application;
pub mod domain;
pub mod utils;

pub use application::services::birthday_service::{BirthdayService, WeekOutcome};
pub use domain::entities::birthday_groups::BirthdayGroups;
pub use domain::entities::person::{Person, RosterError};
pub use domain::value_objects::weekday_format::WeekdayFormat;
