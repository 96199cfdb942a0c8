pub mod weekday_format;

pub use weekday_format::WeekdayFormat;
