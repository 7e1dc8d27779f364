//! Raw weekly schedule types shared by the global options and per-location
//! opening-hours overrides.

use serde::{Deserialize, Serialize};

/// Day of the week, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days in Monday-first order. Every schedule computation
    /// iterates this array so merged day lists stay Monday-first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The schema.org day name (`"Monday"` … `"Sunday"`).
    #[must_use]
    pub fn as_schema_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_schema_str())
    }
}

/// Raw stored opening hours for one day.
///
/// `None` (or a value that fails to parse as a time) means closed for that
/// slot. The second slot is only consulted when the `multiple_opening_hours`
/// option is on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub from2: Option<String>,
    #[serde(default)]
    pub to2: Option<String>,
    /// Open around the clock on this day; wins over any stored times.
    #[serde(default)]
    pub open_24h: bool,
}

impl DayHours {
    /// A single-slot day.
    #[must_use]
    pub fn open(from: &str, to: &str) -> Self {
        DayHours {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            ..DayHours::default()
        }
    }

    /// A day open around the clock.
    #[must_use]
    pub fn all_day() -> Self {
        DayHours {
            open_24h: true,
            ..DayHours::default()
        }
    }

    /// A closed day (no stored values).
    #[must_use]
    pub fn closed() -> Self {
        DayHours::default()
    }
}

/// One `DayHours` per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekSchedule {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl WeekSchedule {
    /// The stored hours for `day`.
    #[must_use]
    pub fn day(&self, day: Day) -> &DayHours {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    /// Mutable access, used by site-file loaders and tests.
    pub fn day_mut(&mut self, day: Day) -> &mut DayHours {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }

    /// Apply the same hours to every weekday.
    #[must_use]
    pub fn uniform(hours: DayHours) -> Self {
        let mut week = WeekSchedule::default();
        for day in Day::ALL {
            *week.day_mut(day) = hours.clone();
        }
        week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_days_are_monday_first() {
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[6], Day::Sunday);
        assert_eq!(Day::ALL.len(), 7);
    }

    #[test]
    fn schema_str_matches_day() {
        assert_eq!(Day::Monday.as_schema_str(), "Monday");
        assert_eq!(Day::Sunday.as_schema_str(), "Sunday");
    }

    #[test]
    fn day_lookup_roundtrips_with_day_mut() {
        let mut week = WeekSchedule::default();
        *week.day_mut(Day::Wednesday) = DayHours::open("09:00", "17:00");
        assert_eq!(week.day(Day::Wednesday).from.as_deref(), Some("09:00"));
        assert_eq!(week.day(Day::Tuesday), &DayHours::closed());
    }

    #[test]
    fn uniform_fills_all_days() {
        let week = WeekSchedule::uniform(DayHours::open("08:00", "16:00"));
        for day in Day::ALL {
            assert_eq!(week.day(day).to.as_deref(), Some("16:00"));
        }
    }
}
