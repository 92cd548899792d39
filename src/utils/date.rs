use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`, or the keywords `today` / `yesterday` relative to `today`.
pub fn parse_date_relative(s: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" | "t" => Ok(today),
        "yesterday" | "y" => today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        other => parse_date(other).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_iso_dates() {
        let t = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(parse_date_relative("today", t).unwrap(), t);
        assert_eq!(
            parse_date_relative("Yesterday", t).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_eq!(
            parse_date_relative("2024-12-31", t).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert!(matches!(
            parse_date_relative("31/12/2024", t),
            Err(AppError::InvalidDate(_))
        ));
    }
}
