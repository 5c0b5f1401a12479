//! Age string derivation and inversion
//!
//! A date column can display elapsed time instead of the stored date: the
//! cell shows `"<years> year <months> month <days> day"` relative to today,
//! recomputed on every render. Entering edit mode runs the inverse to
//! reconstruct an approximate birth date for the date input.

use chrono::Datelike;
use chrono::Days;
use chrono::Local;
use chrono::Months;
use chrono::NaiveDate;

/// Formats the elapsed time between `birth` and `today`.
///
/// Day and month differences borrow the conventional way: a negative day
/// difference borrows the length of the calendar month *before today* (not
/// before the birthday), then a negative month difference borrows 12.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use datagrid::age::age_string;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(age_string(birth, today), "24 year 2 month 5 day");
/// ```
pub fn age_string(birth: NaiveDate, today: NaiveDate) -> String {
    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(today);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    format!("{years} year {months} month {days} day")
}

/// Formats the elapsed time from an ISO birth date string to the local date.
///
/// Returns `None` when the string is not a valid `YYYY-MM-DD` date.
pub fn compute_age(birth_iso: &str) -> Option<String> {
    let birth = NaiveDate::parse_from_str(birth_iso, "%Y-%m-%d").ok()?;
    Some(age_string(birth, Local::now().date_naive()))
}

/// Reconstructs an approximate birth date from a formatted age string.
///
/// The three leading numeric tokens are read in order (years, months, days)
/// and subtracted from `today` in the literal order days, then months, then
/// years. Because month lengths vary, `age_string(birthdate_from_age(x)..)`
/// is not guaranteed to reproduce `x` near month boundaries; the mismatch is
/// inherent to the display format, not corrected here.
pub fn birthdate_from_age(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let mut numbers = text
        .split_whitespace()
        .filter_map(|token| token.parse::<u32>().ok());
    let years = numbers.next()?;
    let months = numbers.next()?;
    let days = numbers.next()?;

    today
        .checked_sub_days(Days::new(days as u64))?
        .checked_sub_months(Months::new(months))?
        .checked_sub_months(Months::new(years.checked_mul(12)?))
}

/// Like [`birthdate_from_age`], formatted as zero-padded `YYYY-MM-DD`.
pub fn birthdate_string_from_age(text: &str, today: NaiveDate) -> Option<String> {
    birthdate_from_age(text, today).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Number of days in the calendar month before the one `today` falls in.
fn days_in_previous_month(today: NaiveDate) -> i32 {
    let first_of_month = today.with_day(1).unwrap_or(today);
    match first_of_month.pred_opt() {
        Some(last_of_previous) => last_of_previous.day() as i32,
        None => 31,
    }
}
