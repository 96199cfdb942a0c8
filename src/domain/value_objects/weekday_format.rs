use chrono::Weekday;

pub trait WeekdayFormat {
    fn full_en(&self) -> &'static str;
    fn is_weekend(&self) -> bool;
    fn from_index(days_from_monday: u32) -> Option<Weekday>;
}

impl WeekdayFormat for Weekday {
    /// Converts weekday to its full english name
    fn full_en(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Saturday and Sunday count as weekend
    fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }

    /// Inverse of `num_days_from_monday`: 0 = Monday .. 6 = Sunday
    fn from_index(days_from_monday: u32) -> Option<Weekday> {
        match days_from_monday {
            0 => Some(Weekday::Mon),
            1 => Some(Weekday::Tue),
            2 => Some(Weekday::Wed),
            3 => Some(Weekday::Thu),
            4 => Some(Weekday::Fri),
            5 => Some(Weekday::Sat),
            6 => Some(Weekday::Sun),
            _ => None,
        }
    }
}
