//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - batch determinism and order preservation
//! - rule priority (quarantine before secondary)
//! - the date and visa windows relative to an arbitrary "today"

use crate::clock::FixedClock;
use crate::engine::{decide, decide_all, decide_all_par};
use crate::format::{is_valid_date, is_valid_passport};
use crate::model::{Place, TravellerRecord};
use crate::rules::is_valid_visa;
use crate::test_support::{WATCHED_PASSPORT, countries, place, returning_citizen, visa, watchlist};
use kanadia_types::Verdict;
use proptest::prelude::*;
use time::{Date, Duration, Month};

// ============================================================================
// Strategies
// ============================================================================

/// Dates between 1950 and 2100, avoiding Feb 29 so year arithmetic is exact.
fn arb_today() -> impl Strategy<Value = Date> {
    (1950i32..2100, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| {
        let month = Month::try_from(m).expect("month in range");
        Date::from_calendar_date(y, month, d).expect("day in range")
    })
}

fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[A-Za-z]{1,8}".prop_map(Some),
    ]
}

fn arb_country() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("KAN".to_string())),
        Just(Some("ITD".to_string())),
        Just(Some("vvr".to_string())),
        Just(Some("TVR".to_string())),
        Just(Some("LUG".to_string())),
        Just(Some("XYZ".to_string())),
    ]
}

fn arb_place() -> impl Strategy<Value = Option<Place>> {
    prop_oneof![
        1 => Just(None),
        4 => (arb_country(), arb_field(), arb_field()).prop_map(|(country, city, region)| {
            Some(Place {
                country,
                city,
                region,
            })
        }),
    ]
}

fn arb_passport() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(WATCHED_PASSPORT.to_string())),
        "[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}-[A-Z0-9]{5}".prop_map(Some),
        "[A-Z0-9-]{0,30}".prop_map(Some),
    ]
}

fn arb_reason() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("visit".to_string())),
        Just(Some("TRANSIT".to_string())),
        Just(Some("Returning".to_string())),
        Just(Some("other".to_string())),
    ]
}

fn arb_record() -> impl Strategy<Value = TravellerRecord> {
    (
        arb_place(),
        arb_place(),
        prop::option::of(arb_place().prop_map(|p| p.unwrap_or_default())),
        arb_field(),
        arb_field(),
        arb_passport(),
        arb_reason(),
        prop::option::of(Just("1980-02-02".to_string())),
        prop::option::of(Just(visa("2023-01-01"))),
    )
        .prop_map(
            |(home, from, via, first_name, last_name, passport, entry_reason, birth_date, visa)| {
                TravellerRecord {
                    home,
                    from,
                    via,
                    first_name,
                    last_name,
                    passport,
                    entry_reason,
                    birth_date,
                    visa,
                }
            },
        )
}

fn date_str(d: Date) -> String {
    d.to_string()
}

fn years(today: Date, n: i32) -> Date {
    today.replace_year(today.year() - n).expect("no leap day")
}

// ============================================================================
// Batch properties
// ============================================================================

proptest! {
    #[test]
    fn batch_is_deterministic_and_order_preserving(
        records in prop::collection::vec(arb_record(), 0..24),
        today in arb_today(),
    ) {
        let clock = FixedClock(today);
        let countries = countries();
        let watchlist = watchlist();

        let first = decide_all(&records, &countries, &watchlist, &clock);
        let second = decide_all(&records, &countries, &watchlist, &clock);
        let parallel = decide_all_par(&records, &countries, &watchlist, &clock);

        prop_assert_eq!(first.len(), records.len());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &parallel);

        for (record, verdict) in records.iter().zip(&first) {
            prop_assert_eq!(*verdict, decide(record, &countries, &watchlist, &clock));
        }
    }

    #[test]
    fn quarantine_wins_over_watchlist(
        mut record in arb_record(),
        today in arb_today(),
    ) {
        record.from = Some(place("LUG"));
        record.passport = Some(WATCHED_PASSPORT.to_string());
        let verdict = decide(&record, &countries(), &watchlist(), &FixedClock(today));
        prop_assert_eq!(verdict, Verdict::Quarantine);
    }

    #[test]
    fn single_missing_field_always_rejects(field in 0usize..7, today in arb_today()) {
        let mut record = returning_citizen();
        record.birth_date = Some(date_str(years(today, 30)));
        match field {
            0 => record.home = None,
            1 => record.first_name = None,
            2 => record.last_name = Some(String::new()),
            3 => record.passport = None,
            4 => record.entry_reason = Some(String::new()),
            5 => record.from.as_mut().expect("from").city = None,
            _ => record.birth_date = None,
        }
        let verdict = decide(&record, &countries(), &watchlist(), &FixedClock(today));
        prop_assert_eq!(verdict, Verdict::Reject);
    }
}

// ============================================================================
// Validator properties
// ============================================================================

proptest! {
    #[test]
    fn validators_are_pure(s in ".{0,40}", today in arb_today()) {
        prop_assert_eq!(is_valid_date(&s, today), is_valid_date(&s, today));
        prop_assert_eq!(is_valid_passport(&s), is_valid_passport(&s));
    }

    #[test]
    fn date_window_boundaries(today in arb_today()) {
        prop_assert!(is_valid_date(&date_str(today), today));
        prop_assert!(!is_valid_date(&date_str(today + Duration::days(1)), today));
        prop_assert!(is_valid_date(&date_str(years(today, 149)), today));
        prop_assert!(is_valid_date(&date_str(years(today, 150)), today));
        prop_assert!(!is_valid_date(&date_str(years(today, 151)), today));
    }

    #[test]
    fn visa_window_boundaries(today in arb_today()) {
        let two_years = years(today, 2);
        let mut record = returning_citizen();

        record.visa = Some(visa(&date_str(two_years + Duration::days(1))));
        prop_assert!(is_valid_visa(&record, today));

        record.visa = Some(visa(&date_str(two_years)));
        prop_assert!(!is_valid_visa(&record, today));

        record.visa = Some(visa(&date_str(two_years - Duration::days(1))));
        prop_assert!(!is_valid_visa(&record, today));
    }

    #[test]
    fn well_formed_passports_pass(p in "[A-Za-z0-9]{5}(-[A-Za-z0-9]{5}){4}") {
        prop_assert!(is_valid_passport(&p));
    }

    #[test]
    fn short_group_passports_fail(
        groups in prop::collection::vec("[A-Z0-9]{5}", 5),
        short in 0usize..5,
        cut in 0usize..5,
    ) {
        let mut groups = groups;
        groups[short].truncate(cut);
        prop_assert!(!is_valid_passport(&groups.join("-")));
    }
}
