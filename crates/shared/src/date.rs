use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub const DAYS_IN_WEEK: usize = 7;

/// Monday of the week containing `date`.
pub fn week_start(date: Date) -> Date {
    date - Duration::days(date.weekday().number_days_from_monday().into())
}

pub fn next_week(start: Date) -> Date {
    week_start(start) + Duration::weeks(1)
}

pub fn previous_week(start: Date) -> Date {
    week_start(start) - Duration::weeks(1)
}

pub fn week_days(start: Date) -> impl Iterator<Item = Date> {
    (0..DAYS_IN_WEEK as i64).map(move |offset| start + Duration::days(offset))
}

pub fn parse_date(value: &str) -> crate::Result<Date> {
    Ok(Date::parse(value.trim(), DATE_FORMAT)?)
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_start_is_monday() {
        assert_eq!(week_start(date!(2025 - 10 - 22)), date!(2025 - 10 - 20));
        assert_eq!(week_start(date!(2025 - 10 - 20)), date!(2025 - 10 - 20));
        assert_eq!(week_start(date!(2025 - 10 - 26)), date!(2025 - 10 - 20));
    }

    #[test]
    fn test_week_navigation() {
        assert_eq!(next_week(date!(2025 - 10 - 20)), date!(2025 - 10 - 27));
        assert_eq!(previous_week(date!(2025 - 10 - 23)), date!(2025 - 10 - 13));
    }

    #[test]
    fn test_week_days_spans_seven_days() {
        let days: Vec<_> = week_days(date!(2025 - 12 - 29)).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], date!(2026 - 01 - 04));
    }

    #[test]
    fn test_parse_and_format_date() {
        let parsed = parse_date(" 2025-01-06 ").unwrap();
        assert_eq!(parsed, date!(2025 - 01 - 06));
        assert_eq!(format_date(parsed), "2025-01-06");
        assert!(parse_date("06/01/2025").is_err());
    }
}
