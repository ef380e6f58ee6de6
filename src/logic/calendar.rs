// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Date helpers: form date parsing, date-of-birth bounds, and today's long form.

use chrono::{Local, Months, NaiveDate};

/// Oldest accepted birth date, in years before today.
pub const DOB_SPAN_YEARS: u32 = 120;

/// Wire format of date inputs (`YYYY-MM-DD`).
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range offered by the date-of-birth control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DobBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DobBounds {
    /// `min` attribute value (`YYYY-MM-DD`).
    pub fn min_attr(&self) -> String {
        format_form_date(self.min)
    }

    /// `max` attribute value (`YYYY-MM-DD`).
    pub fn max_attr(&self) -> String {
        format_form_date(self.max)
    }
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date-of-birth range: 120 years before `today` through `today`.
///
/// A Feb 29 `today` that lands on a non-leap year clamps to Feb 28.
pub fn dob_bounds(today: NaiveDate) -> DobBounds {
    let min = today
        .checked_sub_months(Months::new(DOB_SPAN_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);
    DobBounds { min, max: today }
}

/// Long human-readable date, e.g. "Wednesday, October 14, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` form value into a real calendar date.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT).ok()
}

pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_span_120_years() {
        let bounds = dob_bounds(date(2026, 10, 14));
        assert_eq!(bounds.min_attr(), "1906-10-14");
        assert_eq!(bounds.max_attr(), "2026-10-14");
    }

    #[test]
    fn bounds_clamp_leap_day() {
        let bounds = dob_bounds(date(2024, 2, 29));
        assert_eq!(bounds.min, date(1904, 2, 29));

        let bounds = dob_bounds(date(2028, 2, 29));
        assert_eq!(bounds.min, date(1908, 2, 29));

        // 1900 was not a leap year.
        let bounds = dob_bounds(date(2020, 2, 29));
        assert_eq!(bounds.min, date(1900, 2, 28));
    }

    #[test]
    fn long_date_spells_weekday_and_month() {
        assert_eq!(long_date(date(2026, 10, 14)), "Wednesday, October 14, 2026");
        assert_eq!(long_date(date(2025, 3, 2)), "Sunday, March 2, 2025");
    }

    #[test]
    fn parse_form_date_rejects_impossible_dates() {
        assert_eq!(parse_form_date("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(parse_form_date("2023-02-29"), None);
        assert_eq!(parse_form_date("2024-13-01"), None);
        assert_eq!(parse_form_date("not-a-date"), None);
    }
}
