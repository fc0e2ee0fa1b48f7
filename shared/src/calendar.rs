//! Month grid and event entries for the dashboard calendar.

use crate::datetime::{format_time, local_date};
use crate::dto::event::EventDto;
use crate::dto::user::UserRole;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Cells in a six-week grid.
pub const GRID_CELLS: usize = 42;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        MonthCursor {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor::new(date.year(), date.month())
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthCursor::new(self.year - 1, 12)
        } else {
            MonthCursor::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthCursor::new(self.year + 1, 1)
        } else {
            MonthCursor::new(self.year, self.month + 1)
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(self) -> u32 {
        let first = self.first_day();
        let next = self.next().first_day();
        (next - first).num_days() as u32
    }

    /// Heading such as "April 2025".
    pub fn title(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMonth {
    Prev,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub month: CellMonth,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_current_month(&self) -> bool {
        self.month == CellMonth::Current
    }
}

/// Six weeks starting on the Sunday on or before the first of the month.
pub fn month_grid(cursor: MonthCursor) -> Vec<DayCell> {
    let first = cursor.first_day();
    let lead = first.weekday().num_days_from_sunday() as i64;
    let grid_start = first - Duration::days(lead);
    let last = first + Duration::days(cursor.days_in_month() as i64 - 1);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            let month = if date < first {
                CellMonth::Prev
            } else if date > last {
                CellMonth::Next
            } else {
                CellMonth::Current
            };
            DayCell { date, month }
        })
        .collect()
}

/// An event placed on the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub title: String,
    pub time_start: String,
    /// Utility-class colour family
    pub color: &'static str,
}

impl CalendarEntry {
    /// Places an event on its start day; events without a start fall on `now`.
    pub fn from_event(event: &EventDto, role: UserRole, tz: Tz, now: DateTime<Utc>) -> Self {
        let start = event.conducted_dates.start.unwrap_or(now);
        let title = if event.name.trim().is_empty() {
            "Untitled Event".to_string()
        } else {
            event.name.clone()
        };
        CalendarEntry {
            date: local_date(&start, tz),
            title,
            time_start: format_time(&start, tz),
            color: match role {
                UserRole::Organizer => "purple",
                UserRole::Student => "blue",
            },
        }
    }
}

pub fn entries_on(entries: &[CalendarEntry], date: NaiveDate) -> Vec<&CalendarEntry> {
    entries.iter().filter(|e| e.date == date).collect()
}

/// Entries strictly after `today`.
pub fn upcoming(entries: &[CalendarEntry], today: NaiveDate) -> Vec<&CalendarEntry> {
    entries.iter().filter(|e| e.date > today).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::resolve_timezone;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cursor_wraps_years() {
        let jan = MonthCursor::new(2025, 1);
        assert_eq!(jan.prev(), MonthCursor::new(2024, 12));
        assert_eq!(MonthCursor::new(2024, 12).next(), jan);
        assert_eq!(jan.title(), "January 2025");
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2025, 2, 28)]
    #[case(2025, 4, 30)]
    #[case(2025, 12, 31)]
    fn days_in_month(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
        assert_eq!(MonthCursor::new(year, month).days_in_month(), days);
    }

    #[test]
    fn april_2025_grid() {
        // April 1st 2025 is a Tuesday
        let grid = month_grid(MonthCursor::new(2025, 4));
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0], DayCell { date: date(2025, 3, 30), month: CellMonth::Prev });
        assert_eq!(grid[2], DayCell { date: date(2025, 4, 1), month: CellMonth::Current });
        assert_eq!(grid[31].date, date(2025, 4, 30));
        assert_eq!(grid[32].month, CellMonth::Next);
        assert_eq!(grid[41].date, date(2025, 5, 10));
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_days() {
        // June 1st 2025 is a Sunday
        let grid = month_grid(MonthCursor::new(2025, 6));
        assert_eq!(grid[0].date, date(2025, 6, 1));
        assert!(grid[0].is_current_month());
        assert_eq!(grid.iter().filter(|c| c.is_current_month()).count(), 30);
    }

    #[test]
    fn entry_uses_local_day_and_role_colour() {
        let event: EventDto = serde_json::from_str(
            r#"{"_id":"e1","name":"Tech Fest","conductedDates":{"start":"2025-04-15T20:00:00Z"}}"#,
        )
        .unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let entry = CalendarEntry::from_event(
            &event,
            UserRole::Organizer,
            resolve_timezone("Asia/Kolkata"),
            now,
        );
        assert_eq!(entry.date, date(2025, 4, 16));
        assert_eq!(entry.time_start, "01:30");
        assert_eq!(entry.color, "purple");
    }

    #[test]
    fn untitled_event_without_start_lands_on_now() {
        let event = EventDto {
            id: "e2".into(),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 10, 15, 0).unwrap();
        let entry = CalendarEntry::from_event(&event, UserRole::Student, Tz::UTC, now);
        assert_eq!(entry.title, "Untitled Event");
        assert_eq!(entry.date, date(2025, 3, 9));
        assert_eq!(entry.color, "blue");
    }

    #[test]
    fn today_and_upcoming_filters() {
        let entry = |d: NaiveDate, title: &str| CalendarEntry {
            date: d,
            title: title.into(),
            time_start: "09:00".into(),
            color: "blue",
        };
        let entries = vec![
            entry(date(2025, 4, 14), "past"),
            entry(date(2025, 4, 15), "today"),
            entry(date(2025, 4, 20), "later"),
        ];
        let today = date(2025, 4, 15);
        let titles = |list: Vec<&CalendarEntry>| {
            list.into_iter().map(|e| e.title.clone()).collect::<Vec<_>>()
        };
        assert_eq!(titles(entries_on(&entries, today)), vec!["today"]);
        assert_eq!(titles(upcoming(&entries, today)), vec!["later"]);
    }
}
