//! Field-format predicates shared by the validator and the visa rule.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

/// Oldest acceptable date for any record date, in whole years before today.
pub const MAX_AGE_YEARS: i32 = 150;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const PASSPORT_GROUPS: usize = 5;
const PASSPORT_GROUP_LEN: usize = 5;

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Exactly ten ASCII bytes: four-digit year, two-digit month and day, hyphen separators.
/// Signs, short fields and trailing text are rejected.
pub fn parse_date(s: &str) -> Option<Date> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    Date::parse(s, DATE_FORMAT).ok()
}

/// `today` moved back by whole calendar years.
///
/// Feb 29 lands on Feb 28 when the target year is not a leap year.
pub fn years_before(today: Date, years: i32) -> Date {
    let year = today.year() - years;
    today.replace_year(year).unwrap_or_else(|_| {
        Date::from_calendar_date(year, Month::February, 28).unwrap_or(Date::MIN)
    })
}

/// A `YYYY-MM-DD` date that is neither in the future nor more than 150 years old.
pub fn is_valid_date(s: &str, today: Date) -> bool {
    match parse_date(s) {
        Some(date) => date <= today && date >= years_before(today, MAX_AGE_YEARS),
        None => false,
    }
}

/// Five groups of exactly five characters joined by hyphens, anchored at both ends.
///
/// Group characters are arbitrary except for `\n`.
pub fn is_valid_passport(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let expected_len = PASSPORT_GROUPS * PASSPORT_GROUP_LEN + (PASSPORT_GROUPS - 1);
    if chars.len() != expected_len {
        return false;
    }
    chars.iter().enumerate().all(|(i, c)| {
        if (i + 1) % (PASSPORT_GROUP_LEN + 1) == 0 {
            *c == '-'
        } else {
            *c != '\n'
        }
    })
}
