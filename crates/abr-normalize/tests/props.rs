//! Robustness properties for the cell parsers.

use proptest::prelude::*;

use abr_normalize::{parse_count, parse_currency, parse_percentage};

proptest! {
    #[test]
    fn currency_never_panics_and_stays_finite(s in ".*") {
        let value = parse_currency(&s, "£");
        prop_assert!(value.is_finite());
    }

    #[test]
    fn percentage_never_panics_and_stays_finite(s in ".*") {
        if let Some(value) = parse_percentage(&s) {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn count_never_panics(s in ".*") {
        let _ = parse_count(&s);
    }

    #[test]
    fn currency_inverts_two_decimal_formatting(v in -1_000_000.0..1_000_000.0f64) {
        let text = format!("£{v:.2}");
        let expected: f64 = format!("{v:.2}").parse().expect("formatted float");
        prop_assert_eq!(parse_currency(&text, "£"), expected);
    }

    #[test]
    fn percentage_inverts_one_decimal_formatting(v in -500.0..500.0f64) {
        let text = format!("{v:.1}%");
        let expected: f64 = format!("{v:.1}").parse().expect("formatted float");
        prop_assert_eq!(parse_percentage(&text), Some(expected));
    }

    #[test]
    fn counts_with_separators_round_trip(v in -10_000_000i64..10_000_000i64) {
        let plain = v.to_string();
        prop_assert_eq!(parse_count(&plain), v);
    }
}
