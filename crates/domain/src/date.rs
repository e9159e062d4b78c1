use chrono::{Datelike, NaiveDate, Weekday};

// Danish weekday abbreviations, indexed Sunday first
const WEEKDAYS: [&str; 7] = ["S", "M", "T", "O", "T", "F", "L"];

// Danish month names
const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "Marts",
    "April",
    "Maj",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub day: u32,
    pub weekday: &'static str,
    pub week_number: u32,
    pub is_last_day_of_week: bool,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub name: &'static str,
    pub year: i32,
    /// 1-indexed month number
    pub month: u32,
    pub days: Vec<DayInfo>,
}

/// Localized day-by-day layout for one month, consumed by the UI
/// calendar grid. ISO week numbers, Sunday closing each week row.
pub fn month_grid(year: i32, month: u32) -> anyhow::Result<MonthGrid> {
    if month < 1 || month > 12 {
        return Err(anyhow::Error::msg(format!("Invalid month: {}", month)));
    }
    let mut days = Vec::with_capacity(31);
    let mut date = NaiveDate::from_ymd(year, month, 1);
    while date.month() == month {
        let weekday = date.weekday();
        days.push(DayInfo {
            date,
            day: date.day(),
            weekday: WEEKDAYS[weekday.num_days_from_sunday() as usize],
            week_number: date.iso_week().week(),
            is_last_day_of_week: weekday == Weekday::Sun,
        });
        date = date.succ();
    }
    Ok(MonthGrid {
        name: MONTHS[(month - 1) as usize],
        year,
        month,
        days,
    })
}

/// The original app's default range: January through June.
pub fn semester_grid(year: i32) -> Vec<MonthGrid> {
    (1..=6)
        .map(|month| month_grid(year, month).expect("month in 1..=6 is valid"))
        .collect()
}

/// Parses the store's `YYYY-MM-DD` local-date strings.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(datestr, "%Y-%m-%d")
        .map_err(|_| anyhow::Error::msg(datestr.to_string()))
}
