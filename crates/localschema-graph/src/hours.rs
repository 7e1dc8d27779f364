//! Effective opening-hours resolution.
//!
//! Turns the stored weekly values (global, shared, or per-location) into a
//! normalized schedule: days with identical hours merge into one entry,
//! Monday-first order preserved, and the result maps 1:1 onto
//! `OpeningHoursSpecification` nodes.
//!
//! Two representations look alike but mean opposites and are both load-
//! bearing for downstream consumers: a 24h-open day set emits
//! `00:00`–`23:59`, an explicitly closed day set emits `00:00`–`00:00`.
//! Regression tests pin both.

use chrono::NaiveTime;
use localschema_core::{Day, DayHours, LocationRecord, Options, WeekSchedule};
use serde_json::Value;

/// Whose schedule to resolve.
#[derive(Debug, Clone, Copy)]
pub enum HoursSource<'a> {
    /// A specific location's effective schedule.
    Location(&'a LocationRecord),
    /// The global/shared settings schedule.
    Shared,
}

/// One normalized schedule row: the same hours on every listed day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub days: Vec<Day>,
    /// `"HH:MM"`, 24-hour clock.
    pub opens: String,
    pub closes: String,
}

/// Resolved hours for a single day, the unit of merging.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResolvedDay {
    AllDay,
    /// One or two slots; `None` means that slot is closed.
    Slots(Vec<Option<(NaiveTime, NaiveTime)>>),
}

/// Resolve the effective schedule for `source`.
///
/// Open-24/7 (the location's override if present, else the global flag)
/// short-circuits to a single all-week `00:00`–`23:59` entry. Otherwise each
/// day resolves independently, unparseable or missing times count as closed,
/// and days with identical resolved hours merge.
#[must_use]
pub fn resolve_schedule(source: HoursSource<'_>, options: &Options) -> Vec<ScheduleEntry> {
    if effective_open_247(source, options) {
        return vec![ScheduleEntry {
            days: Day::ALL.to_vec(),
            opens: "00:00".to_string(),
            closes: "23:59".to_string(),
        }];
    }

    let week = effective_week(source, options);

    // Bucket days by identical resolved hours, first-seen order; iterating
    // Day::ALL keeps every day list Monday-first.
    let mut buckets: Vec<(ResolvedDay, Vec<Day>)> = Vec::new();
    for day in Day::ALL {
        let resolved = resolve_day(week.day(day), options);
        match buckets.iter_mut().find(|(r, _)| *r == resolved) {
            Some((_, days)) => days.push(day),
            None => buckets.push((resolved, vec![day])),
        }
    }

    let mut entries = Vec::new();
    for (resolved, days) in buckets {
        match resolved {
            ResolvedDay::AllDay => entries.push(ScheduleEntry {
                days,
                opens: "00:00".to_string(),
                closes: "23:59".to_string(),
            }),
            ResolvedDay::Slots(slots) => {
                if slots.iter().all(Option::is_none) {
                    entries.push(ScheduleEntry {
                        days,
                        opens: "00:00".to_string(),
                        closes: "00:00".to_string(),
                    });
                    continue;
                }
                for (opens, closes) in slots.into_iter().flatten() {
                    entries.push(ScheduleEntry {
                        days: days.clone(),
                        opens: opens.format("%H:%M").to_string(),
                        closes: closes.format("%H:%M").to_string(),
                    });
                }
            }
        }
    }
    entries
}

/// `OpeningHoursSpecification` nodes for a resolved schedule, one per entry.
#[must_use]
pub fn schedule_to_nodes(entries: &[ScheduleEntry]) -> Vec<Value> {
    entries
        .iter()
        .map(|entry| {
            let days: Vec<&str> = entry.days.iter().map(|d| d.as_schema_str()).collect();
            serde_json::json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": days,
                "opens": entry.opens,
                "closes": entry.closes,
            })
        })
        .collect()
}

/// Whether the schedule reports open at the given day and time.
///
/// Entries where `opens == closes` are the closed-day convention and never
/// match.
#[must_use]
pub fn is_open_at(entries: &[ScheduleEntry], day: Day, time: NaiveTime) -> bool {
    entries.iter().any(|entry| {
        if !entry.days.contains(&day) || entry.opens == entry.closes {
            return false;
        }
        let (Some(opens), Some(closes)) = (
            parse_time(&entry.opens, false),
            parse_time(&entry.closes, false),
        ) else {
            return false;
        };
        opens <= time && time <= closes
    })
}

fn effective_open_247(source: HoursSource<'_>, options: &Options) -> bool {
    match source {
        HoursSource::Location(location) => {
            location.hours.open_247.unwrap_or(options.open_247)
        }
        HoursSource::Shared => options.open_247,
    }
}

/// Which stored week applies: under shared opening hours a location's own
/// week only counts once its explicit override flag is set.
fn effective_week<'a>(source: HoursSource<'a>, options: &'a Options) -> &'a WeekSchedule {
    match source {
        HoursSource::Shared => &options.hours,
        HoursSource::Location(location) => {
            let shared_applies = options.multiple_locations
                && options.same_organization
                && options.shared_opening_hours
                && !location.hours.overrides_shared;
            if shared_applies {
                &options.hours
            } else {
                &location.hours.week
            }
        }
    }
}

fn resolve_day(day_hours: &DayHours, options: &Options) -> ResolvedDay {
    if day_hours.open_24h {
        return ResolvedDay::AllDay;
    }
    let mut slots = vec![resolve_slot(
        day_hours.from.as_deref(),
        day_hours.to.as_deref(),
        options.format_12h,
    )];
    if options.multiple_opening_hours {
        slots.push(resolve_slot(
            day_hours.from2.as_deref(),
            day_hours.to2.as_deref(),
            options.format_12h,
        ));
    }
    ResolvedDay::Slots(slots)
}

fn resolve_slot(
    from: Option<&str>,
    to: Option<&str>,
    format_12h: bool,
) -> Option<(NaiveTime, NaiveTime)> {
    let from = parse_time(from?, format_12h)?;
    let to = parse_time(to?, format_12h)?;
    Some((from, to))
}

/// Parse a stored time value; `None` means closed for that slot.
fn parse_time(raw: &str, format_12h: bool) -> Option<NaiveTime> {
    let raw = raw.trim();
    if format_12h {
        NaiveTime::parse_from_str(raw, "%I:%M %p")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .ok()
    } else {
        NaiveTime::parse_from_str(raw, "%H:%M").ok()
    }
}
