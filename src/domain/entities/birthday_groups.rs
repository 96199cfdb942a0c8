use crate::domain::value_objects::weekday_format::WeekdayFormat;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names grouped by the weekday their birthday lands on.
///
/// Buckets are keyed by days-from-Monday so iteration is always Monday first,
/// and names inside a bucket keep their roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayGroups {
    groups: BTreeMap<u32, Vec<String>>,
}

impl BirthdayGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, weekday: Weekday, name: impl Into<String>) {
        self.groups
            .entry(weekday.num_days_from_monday())
            .or_default()
            .push(name.into());
    }

    /// Moves the Saturday and Sunday buckets to the end of Monday's bucket,
    /// Saturday's names before Sunday's, each in their stored order.
    pub fn fold_weekends_into_monday(&mut self) {
        // materialize the weekend keys before touching the map
        let weekend_keys: Vec<u32> = self
            .groups
            .range(Weekday::Sat.num_days_from_monday()..)
            .map(|(&index, _)| index)
            .collect();

        for index in weekend_keys {
            if let Some(names) = self.groups.remove(&index) {
                self.groups
                    .entry(Weekday::Mon.num_days_from_monday())
                    .or_default()
                    .extend(names);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of weekday buckets with at least one name
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn names_for(&self, weekday: Weekday) -> Option<&[String]> {
        self.groups
            .get(&weekday.num_days_from_monday())
            .map(|names| names.as_slice())
    }

    /// Iterates buckets in ascending weekday order (Monday first)
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.groups.iter().filter_map(|(&index, names)| {
            Weekday::from_index(index).map(|weekday| (weekday, names.as_slice()))
        })
    }
}
