use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a period expression into inclusive date bounds.
///
/// Supported forms:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `START:END` with both sides in the same form
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{r}: start and end must have the same format"
            )));
        }

        let (d1, _) = period_bounds(start)?;
        let (_, d2) = period_bounds(end)?;
        if d2 < d1 {
            return Err(AppError::InvalidDate(format!("{r}: end is before start")));
        }
        Ok((d1, d2))
    } else {
        period_bounds(r.trim())
    }
}

/// First and last day of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let next = if d1.month() == 12 {
                NaiveDate::from_ymd_opt(d1.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(d1.year(), d1.month() + 1, 1)
            }
            .ok_or_else(invalid)?;
            let d2 = next.pred_opt().ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2025-12").unwrap(), (d("2025-12-01"), d("2025-12-31")));
        assert_eq!(parse_range("2025-03-09").unwrap(), (d("2025-03-09"), d("2025-03-09")));
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_range("2025-01:2025-03").unwrap(),
            (d("2025-01-01"), d("2025-03-31"))
        );
        assert!(parse_range("2025:2025-03").is_err());
        assert!(parse_range("2025-05-01:2025-04-01").is_err());
        assert!(parse_range("yesterday").is_err());
    }
}
