use anyhow::Result;
use birthdays::utils::setup_logging;
use birthdays::{BirthdayService, Person, WeekOutcome};
use chrono::{Duration, Local};

fn main() -> Result<()> {
    setup_logging();

    let today = Local::now().date_naive();

    // demo roster with birthdays spread over the next few weeks
    let roster = vec![
        Person::new("John Doe", today + Duration::days(3))?,
        Person::new("Alice Smith", today + Duration::days(5))?,
        Person::new("Bob Johnson", today + Duration::days(7))?,
        Person::new("Emma Williams", today + Duration::days(15))?,
        Person::new("Sarah Brown", today + Duration::days(20))?,
    ];

    let service = BirthdayService::new();
    match service.birthdays_per_week(&roster, today, true)? {
        WeekOutcome::Grouped(groups) => {
            for line in service.format_lines(&groups) {
                println!("{line}");
            }
        }
        // unreachable with run_weekends forced on, the service logs the notice
        WeekOutcome::Skipped => {}
    }

    Ok(())
}
