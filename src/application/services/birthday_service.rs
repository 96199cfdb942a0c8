use crate::domain::entities::birthday_groups::BirthdayGroups;
use crate::domain::entities::person::{Person, RosterError};
use crate::domain::value_objects::weekday_format::WeekdayFormat;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::info;

pub type Result<T> = std::result::Result<T, RosterError>;

/// Outcome of a weekly evaluation. A weekend run that was skipped is not the
/// same thing as a week in which nobody has a birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekOutcome {
    Skipped,
    Grouped(BirthdayGroups),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BirthdayService;

impl BirthdayService {
    pub fn new() -> Self {
        Self
    }

    /// Groups roster members with a birthday in the upcoming week by the
    /// weekday it lands on, with Saturday and Sunday moved to Monday.
    ///
    /// On Saturday and Sunday the evaluation is skipped unless `run_weekends`
    /// is set. A Monday run reaches two days back so birthdays from the
    /// skipped weekend are still reported.
    pub fn birthdays_per_week(
        &self,
        roster: &[Person],
        today: NaiveDate,
        run_weekends: bool,
    ) -> Result<WeekOutcome> {
        // entities built via Person::new are already checked, but roster
        // structs can also be assembled literally
        for person in roster {
            if person.name.trim().is_empty() {
                return Err(RosterError::EmptyName);
            }
        }

        let curr_weekday = today.weekday();
        if curr_weekday.is_weekend() && !run_weekends {
            info!(
                "Today is {} and we don't do evaluations on weekends. Enjoy your free time!",
                curr_weekday.full_en()
            );
            return Ok(WeekOutcome::Skipped);
        }

        // on Monday the window slides back over the weekend that was skipped
        let weekend_offset = if curr_weekday == Weekday::Mon {
            Duration::days(2)
        } else {
            Duration::zero()
        };
        let lower_bound = today - weekend_offset;
        let upper_bound = today + Duration::days(7) - weekend_offset;

        let mut groups = BirthdayGroups::new();
        for person in roster {
            let birthday_this_year = anchor_to_year(person.birthday, today.year());
            if lower_bound <= birthday_this_year && birthday_this_year < upper_bound {
                groups.push(birthday_this_year.weekday(), person.name.clone());
            }
        }

        groups.fold_weekends_into_monday();
        Ok(WeekOutcome::Grouped(groups))
    }

    /// Renders one line per weekday, Monday first, as
    /// `"Wednesday: Bill Gates, Linus Torvalds"` with the weekday column
    /// padded to 10 characters.
    pub fn format_lines(&self, groups: &BirthdayGroups) -> Vec<String> {
        if groups.is_empty() {
            return vec!["No one has birthday next week".to_string()];
        }

        groups
            .iter()
            .map(|(weekday, names)| {
                format!("{:<10} {}", format!("{}:", weekday.full_en()), names.join(", "))
            })
            .collect()
    }
}

/// Re-anchors a birthday to the given year. A Feb 29 birthday becomes Feb 28
/// when the target year is not a leap year.
fn anchor_to_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    match birthday.with_year(year) {
        Some(date) => date,
        None => NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(birthday),
    }
}
