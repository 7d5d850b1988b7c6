use crate::errors::LedgerError;
use chrono::NaiveDate;

/// The format of dates accepted in queries
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// **Parses a calendar date in the `YYYY-MM-DD` format**
///
/// Strict: exactly four year digits, two month digits and two day digits.
/// No sign, no padding, no single-digit months or days.
///
/// # Errors
/// - Not a valid calendar date, `LedgerError::InvalidDate`
pub fn parse_date(date: &str) -> Result<NaiveDate, LedgerError> {
    let invalid = || LedgerError::InvalidDate(date.to_string());

    if !is_iso_date_shaped(date) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(date, QUERY_DATE_FORMAT).map_err(|_| invalid())
}

/// Checks for the `dddd-dd-dd` shape, which chrono alone doesn't enforce.
fn is_iso_date_shaped(date: &str) -> bool {
    let bytes = date.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date_parses() {
        assert_eq!(
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            parse_date("2024-02-29")
        );
    }

    #[test]
    fn test_surrounding_whitespace_fails() {
        assert_eq!(
            Err(LedgerError::InvalidDate(" 2023-10-05".to_string())),
            parse_date(" 2023-10-05")
        );
        assert!(parse_date("2023-10-05\n").is_err());
    }

    #[test]
    fn test_single_digit_month_and_day_fail() {
        assert_eq!(
            Err(LedgerError::InvalidDate("2023-1-5".to_string())),
            parse_date("2023-1-5")
        );
        assert!(parse_date("2023-10-5").is_err());
        assert!(parse_date("2023-1-05").is_err());
    }

    #[test]
    fn test_signed_or_long_year_fails() {
        assert!(parse_date("+2023-10-05").is_err());
        assert!(parse_date("-2023-10-05").is_err());
        assert!(parse_date("12023-10-05").is_err());
    }

    #[test]
    fn test_non_ascii_digits_fail() {
        assert!(parse_date("２０２３-10-05").is_err());
    }

    #[test]
    fn test_non_existing_date_fails() {
        assert_eq!(
            Err(LedgerError::InvalidDate("2023-02-29".to_string())),
            parse_date("2023-02-29")
        );
    }

    #[test]
    fn test_wrong_format_fails() {
        assert!(parse_date("05-10-2023").is_err());
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_error_message_names_the_input() {
        let err = parse_date("2023/10/05").unwrap_err();
        assert_eq!(
            "Invalid date \"2023/10/05\"; expected the YYYY-MM-DD format",
            err.to_string()
        );
    }
}
