//! Business-day date arithmetic for due-date computation.
//!
//! All functions are pure. Weekdays are numbered Monday-first, `1..=7` (Sunday is `7`).
//! Holiday exclusion is accepted in [`BusinessDaysConfig`] but not resolved here: no
//! date is ever excluded as a holiday.

use chrono::{Datelike, Days, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Upper bound on the days probed by [`next_business_day`] and [`previous_business_day`].
pub const MAX_PROBE_DAYS: u32 = 14;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Which days count when scheduling against a form's due dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDaysConfig {
    /// When false every calendar day qualifies.
    #[serde(default, alias = "businessDaysOnly")]
    pub business_days_only: bool,
    /// Monday-first weekday numbers. Entries outside `1..=7` never match.
    #[serde(default, alias = "businessDays")]
    pub business_days: Vec<i64>,
    #[serde(default, alias = "excludeHolidays")]
    pub exclude_holidays: bool,
    #[serde(default, alias = "holidayCalendar")]
    pub holiday_calendar: Option<String>,
}

impl BusinessDaysConfig {
    /// Business-days-only over the given weekday numbers.
    pub fn with_business_days(days: impl IntoIterator<Item = i64>) -> Self {
        Self {
            business_days_only: true,
            business_days: days.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self::with_business_days(1_i64..=5)
    }

    pub fn includes(&self, weekday: Weekday) -> bool {
        let number = i64::from(weekday.number_from_monday());
        self.business_days.contains(&number)
    }

    /// Whether at least one configured entry is a real weekday.
    pub fn has_valid_weekday(&self) -> bool {
        self.business_days.iter().any(|day| (1..=7).contains(day))
    }
}

pub fn is_business_day<D: Datelike>(date: &D, config: &BusinessDaysConfig) -> bool {
    !config.business_days_only || config.includes(date.weekday())
}

/// The first qualifying day after `date`, keeping its time of day.
///
/// Probes at most [`MAX_PROBE_DAYS`] days; if none qualifies the last probed date is
/// returned instead.
pub fn next_business_day(date: NaiveDateTime, config: &BusinessDaysConfig) -> NaiveDateTime {
    probe(date, config, |d| d.checked_add_days(Days::new(1)))
}

/// The last qualifying day before `date`, with the same probe bound as
/// [`next_business_day`].
pub fn previous_business_day(date: NaiveDateTime, config: &BusinessDaysConfig) -> NaiveDateTime {
    probe(date, config, |d| d.checked_sub_days(Days::new(1)))
}

fn probe(
    date: NaiveDateTime,
    config: &BusinessDaysConfig,
    step: impl Fn(NaiveDateTime) -> Option<NaiveDateTime>,
) -> NaiveDateTime {
    let mut current = date;
    for _ in 0..MAX_PROBE_DAYS {
        match step(current) {
            Some(next) => current = next,
            None => return current,
        }
        if is_business_day(&current, config) {
            return current;
        }
    }
    tracing::warn!(
        start = %date,
        probed_until = %current,
        "no business day within probe bound; returning last probed date"
    );
    current
}

/// Days from `start` to `end`.
///
/// Without business-days-only this is the calendar difference, rounded up to whole days
/// and negative when `end` precedes `start`. Otherwise it counts qualifying days from the
/// start of `start`'s day up to, but excluding, `end`'s day; `0` when `start` is not
/// before `end`.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime, config: &BusinessDaysConfig) -> i64 {
    if !config.business_days_only {
        let millis = (end - start).num_milliseconds();
        let whole = millis.div_euclid(MILLIS_PER_DAY);
        return if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
            whole
        } else {
            whole + 1
        };
    }

    let (first, last) = (start.date(), end.date());
    if first >= last {
        return 0;
    }
    first
        .iter_days()
        .take_while(|day| *day < last)
        .filter(|day| is_business_day(day, config))
        .count() as i64
}

/// Moves `date` forward by `n` qualifying days, keeping its time of day.
///
/// Without business-days-only this is plain calendar addition (`n` may be negative).
/// Otherwise days are stepped one at a time and only qualifying days are counted;
/// `n <= 0` returns `date` unchanged. A config without any valid weekday can never
/// reach the target, so `date` is returned as is.
pub fn add_business_days(date: NaiveDateTime, n: i64, config: &BusinessDaysConfig) -> NaiveDateTime {
    if !config.business_days_only {
        return shift_days(date, n);
    }
    if n <= 0 {
        return date;
    }
    if !config.has_valid_weekday() {
        tracing::warn!(
            business_days = ?config.business_days,
            "no valid business weekday configured; date left unchanged"
        );
        return date;
    }

    let mut current = date;
    let mut counted = 0;
    while counted < n {
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
        if is_business_day(&current, config) {
            counted += 1;
        }
    }
    current
}

/// Due date `days` business days after `start`, always landing on a qualifying day
/// when the config has one.
pub fn due_date(start: NaiveDateTime, days: i64, config: &BusinessDaysConfig) -> NaiveDateTime {
    let due = add_business_days(start, days, config);
    if config.has_valid_weekday() && !is_business_day(&due, config) {
        next_business_day(due, config)
    } else {
        due
    }
}

fn shift_days(date: NaiveDateTime, n: i64) -> NaiveDateTime {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
