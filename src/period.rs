//! Pay-cycle resolution.
//!
//! The ledger groups spending by salary month rather than calendar month:
//! everything from the 25th of one month through the 24th of the next is
//! shown under the next month's label. Boundary dates that land on a
//! weekend move back to the preceding Friday (pay arrives early when the
//! banks are closed).

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// One resolved pay-cycle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayCycle {
    /// First day of the month this window is labeled with.
    pub display_month: NaiveDate,
    /// Inclusive window start, weekend-adjusted 25th of the prior month.
    pub start_date: NaiveDate,
    /// Inclusive window end, weekend-adjusted 24th of the display month.
    pub end_date: NaiveDate,
}

impl PayCycle {
    /// Resolve the window containing the given reference date.
    ///
    /// Dates on the 25th or later belong to the following month's window.
    pub fn resolve(reference: NaiveDate) -> Self {
        let display_month = if reference.day() < 25 {
            first_of_month(reference)
        } else {
            add_months(first_of_month(reference), 1)
        };

        let raw_start = with_day(add_months(display_month, -1), 25);
        let raw_end = with_day(display_month, 24);

        Self {
            display_month,
            start_date: shift_off_weekend(raw_start),
            end_date: shift_off_weekend(raw_end),
        }
    }

    /// `"YYYY-MM"` key of this window, used in URLs and budget rows.
    pub fn key(&self) -> String {
        self.display_month.format("%Y-%m").to_string()
    }

    /// Key of the previous window.
    pub fn prev_key(&self) -> String {
        add_months(self.display_month, -1).format("%Y-%m").to_string()
    }

    /// Key of the next window.
    pub fn next_key(&self) -> String {
        add_months(self.display_month, 1).format("%Y-%m").to_string()
    }

    /// Days until the next payday, shown only while viewing the window
    /// that payday belongs to.
    ///
    /// The next 25th on or after `today` is the target; if its month is
    /// not the displayed month the countdown is absent.
    pub fn days_until_payday(&self, today: NaiveDate) -> Option<i64> {
        let target = if today.day() > 24 {
            with_day(add_months(first_of_month(today), 1), 25)
        } else {
            with_day(today, 25)
        };

        if (target.year(), target.month()) == (self.display_month.year(), self.display_month.month())
        {
            Some((target - today).num_days())
        } else {
            None
        }
    }

    /// Whether a date falls inside this window (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Parse an optional `"YYYY-MM"` query value into a reference date.
///
/// Absent or malformed input falls back to `today`; a bad month in the
/// URL is not worth an error page.
pub fn parse_month_or(month: Option<&str>, today: NaiveDate) -> NaiveDate {
    month
        .and_then(|s| NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok())
        .unwrap_or(today)
}

/// `"YYYY-MM"` key of the window a date belongs to.
///
/// Write handlers redirect here so a record dated the 26th lands on the
/// next month's page, where it is actually listed.
pub fn period_key_for(date: NaiveDate) -> String {
    PayCycle::resolve(date).key()
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    with_day(d, 1)
}

fn add_months(d: NaiveDate, months: i32) -> NaiveDate {
    // Always called with day <= 25, so the target day exists in any month.
    if months >= 0 {
        d.checked_add_months(Months::new(months as u32)).unwrap()
    } else {
        d.checked_sub_months(Months::new((-months) as u32)).unwrap()
    }
}

fn with_day(d: NaiveDate, day: u32) -> NaiveDate {
    // Only used for days 1..=25, valid in every month.
    d.with_day(day).unwrap()
}

fn shift_off_weekend(d: NaiveDate) -> NaiveDate {
    match d.weekday() {
        Weekday::Sat => d - Duration::days(1),
        Weekday::Sun => d - Duration::days(2),
        _ => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_before_25th_stays_in_current_month() {
        let cycle = PayCycle::resolve(ymd(2025, 9, 20));
        assert_eq!(cycle.display_month, ymd(2025, 9, 1));
        // 2025-08-25 is a Monday and 2025-09-24 a Wednesday: no shift.
        assert_eq!(cycle.start_date, ymd(2025, 8, 25));
        assert_eq!(cycle.end_date, ymd(2025, 9, 24));
    }

    #[test]
    fn day_25_or_later_rolls_to_next_month() {
        let cycle = PayCycle::resolve(ymd(2025, 8, 26));
        assert_eq!(cycle.display_month, ymd(2025, 9, 1));
        assert_eq!(cycle.key(), "2025-09");
    }

    #[test]
    fn saturday_end_moves_to_friday() {
        // 2026-01-24 is a Saturday.
        let cycle = PayCycle::resolve(ymd(2026, 1, 10));
        assert_eq!(cycle.end_date, ymd(2026, 1, 23));
        assert_eq!(cycle.start_date, ymd(2025, 12, 25));
    }

    #[test]
    fn sunday_start_moves_to_friday() {
        // 2027-04-25 is a Sunday.
        let cycle = PayCycle::resolve(ymd(2027, 5, 1));
        assert_eq!(cycle.start_date, ymd(2027, 4, 23));
        assert_eq!(cycle.end_date, ymd(2027, 5, 24));
    }

    #[test]
    fn year_sweep_boundaries_never_on_weekend() {
        let mut d = ymd(2025, 1, 1);
        while d <= ymd(2025, 12, 31) {
            let cycle = PayCycle::resolve(d);
            assert_ne!(cycle.start_date.weekday(), Weekday::Sat, "{d}");
            assert_ne!(cycle.start_date.weekday(), Weekday::Sun, "{d}");
            assert_ne!(cycle.end_date.weekday(), Weekday::Sat, "{d}");
            assert_ne!(cycle.end_date.weekday(), Weekday::Sun, "{d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn year_sweep_window_length_stays_in_range() {
        let mut d = ymd(2025, 1, 1);
        while d <= ymd(2025, 12, 31) {
            let cycle = PayCycle::resolve(d);
            let len = (cycle.end_date - cycle.start_date).num_days();
            assert!((27..=33).contains(&len), "window {len} days for {d}");
            assert!(cycle.start_date <= cycle.end_date);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn navigation_keys_wrap_across_years() {
        let cycle = PayCycle::resolve(ymd(2025, 1, 10));
        assert_eq!(cycle.key(), "2025-01");
        assert_eq!(cycle.prev_key(), "2024-12");
        assert_eq!(cycle.next_key(), "2025-02");
    }

    #[test]
    fn payday_countdown_shown_only_for_matching_month() {
        let cycle = PayCycle::resolve(ymd(2025, 9, 20));
        // Next 25th from the 20th is 2025-09-25, same month as the display.
        assert_eq!(cycle.days_until_payday(ymd(2025, 9, 20)), Some(5));
        // Viewing an unrelated month: no countdown.
        let other = PayCycle::resolve(ymd(2025, 3, 10));
        assert_eq!(other.days_until_payday(ymd(2025, 9, 20)), None);
    }

    #[test]
    fn payday_countdown_after_the_24th_targets_next_month() {
        // On Aug 26 the next 25th is Sep 25, which is also the month the
        // window is labeled with: the countdown runs to the next boundary.
        let cycle = PayCycle::resolve(ymd(2025, 8, 26));
        assert_eq!(cycle.days_until_payday(ymd(2025, 8, 26)), Some(30));
        // Same wall clock while paging back to August: no countdown.
        let aug = PayCycle::resolve(ymd(2025, 8, 1));
        assert_eq!(aug.days_until_payday(ymd(2025, 8, 26)), None);
    }

    #[test]
    fn month_parameter_parsing_falls_back_to_today() {
        let today = ymd(2025, 9, 20);
        assert_eq!(parse_month_or(Some("2025-03"), today), ymd(2025, 3, 1));
        assert_eq!(parse_month_or(Some("garbage"), today), today);
        assert_eq!(parse_month_or(None, today), today);
    }

    #[test]
    fn period_key_of_a_26th_is_the_next_month() {
        assert_eq!(period_key_for(ymd(2025, 9, 26)), "2025-10");
        assert_eq!(period_key_for(ymd(2025, 9, 10)), "2025-09");
    }
}
