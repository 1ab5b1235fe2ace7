//! Calendar helpers for invoice and due dates.

use chrono::{Days, NaiveDate};

use invoicer_core::{DomainError, DomainResult};

/// Parse a `YYYY-MM-DD` date as entered in a form.
pub fn parse_date(text: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::validation(format!("invalid date {text:?}: {e}")))
}

/// `date` plus `days`, saturating at the end of the supported calendar.
pub fn due_date_after(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
