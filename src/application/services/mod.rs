pub mod birthday_service;

pub use birthday_service::{BirthdayService, WeekOutcome};
