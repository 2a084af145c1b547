use chrono::NaiveDate;

use super::tokenizer::strip_quotes;

/// Parse a sheet date in `DD.MM.YYYY` form.
///
/// Returns `None` for anything that is not a real calendar date
/// ("31.02.2024", "2024-01-01", ""), so callers can drop the row.
pub fn parse_sheet_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = strip_quotes(raw).split('.');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
