//! Date rendering for profile-supplied dates.

use chrono::{DateTime, Datelike, NaiveDate};

/// Parse the date shapes profiles arrive with: RFC 3339 timestamps,
/// `YYYY-MM-DD`, `YYYY-MM` and a bare `YYYY`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(date);
    }
    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

/// `"Mon YYYY"`. Blank input gives an empty string; unparseable input is
/// passed through unchanged.
pub fn month_year(date: Option<&str>) -> String {
    render(date, |d| d.format("%b %Y").to_string())
}

/// Year only, with the same blank and pass-through rules as [`month_year`].
pub fn year_only(date: Option<&str>) -> String {
    render(date, |d| d.year().to_string())
}

fn render(date: Option<&str>, format: impl Fn(NaiveDate) -> String) -> String {
    match date.map(str::trim) {
        None | Some("") => String::new(),
        Some(text) => parse_date(text).map(format).unwrap_or_else(|| text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_formats() {
        assert_eq!(month_year(Some("2021-03-15")), "Mar 2021");
        assert_eq!(month_year(Some("2019-11")), "Nov 2019");
        assert_eq!(month_year(Some("2020-01-15T00:00:00.000Z")), "Jan 2020");
        assert_eq!(month_year(Some("2018")), "Jan 2018");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(month_year(Some("Summer 2019")), "Summer 2019");
        assert_eq!(year_only(Some("present")), "present");
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(month_year(None), "");
        assert_eq!(month_year(Some("  ")), "");
        assert_eq!(year_only(None), "");
    }

    #[test]
    fn test_year_only() {
        assert_eq!(year_only(Some("2016-09-01")), "2016");
        assert_eq!(year_only(Some("2020")), "2020");
    }
}
