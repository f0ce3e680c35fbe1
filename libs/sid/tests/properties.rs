//! Property tests for ID conversions and ordering.

use std::cmp::Ordering;

use proptest::prelude::*;
use sid::{Ids, ScanValue, Sid, SignedSid};

proptest! {
    #[test]
    fn decimal_roundtrip(n in any::<u64>()) {
        let s = n.to_string();
        let id = Sid::from_decimal(&s).unwrap();
        prop_assert_eq!(id.to_string(), s);
        prop_assert_eq!(id.value(), n);
    }

    #[test]
    fn signed_decimal_roundtrip(n in any::<i64>()) {
        let s = n.to_string();
        let id = SignedSid::from_decimal(&s).unwrap();
        prop_assert_eq!(id.to_text(), s);
    }

    #[test]
    fn leading_zeros_parse_to_canonical(n in any::<u32>(), zeros in 1usize..5) {
        let padded = format!("{}{}", "0".repeat(zeros), n);
        let id = Sid::from_text(&padded).unwrap();
        prop_assert_eq!(id.to_string(), n.to_string());
    }

    #[test]
    fn non_digit_text_is_format_error(s in "[0-9]*[^0-9][0-9]*") {
        let err = Sid::from_decimal(&s).unwrap_err();
        prop_assert!(err.is_format_error());
    }

    #[test]
    fn json_roundtrip(n in any::<u64>()) {
        let id = Sid::new(n);
        let json = serde_json::to_string(&id).unwrap();
        prop_assert_eq!(&json, &format!("\"{n}\""));
        let parsed: Sid = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, id);
        prop_assert_eq!(Sid::from_json(json.as_bytes()).unwrap(), id);
    }

    #[test]
    fn signed_json_roundtrip(n in any::<i64>()) {
        let id = SignedSid::new(n);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: SignedSid = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, id);
        // Bare literals are accepted for either sign.
        prop_assert_eq!(SignedSid::from_json(n.to_string().as_bytes()).unwrap(), id);
    }

    #[test]
    fn trichotomy(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (Sid::new(a), Sid::new(b));
        let holds = [a.less_than(&b), a.equal(&b), a.greater_than(&b)];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);

        let ord = a.compare(&b);
        prop_assert_eq!(ord, a.value().cmp(&b.value()));
        prop_assert_eq!(a.equal(&b), ord == Ordering::Equal);
        prop_assert_eq!(a.less_than(&b), ord == Ordering::Less);
        prop_assert_eq!(a.less_than_or_equal(&b), ord != Ordering::Greater);
        prop_assert_eq!(a.greater_than(&b), ord == Ordering::Greater);
        prop_assert_eq!(a.greater_than_or_equal(&b), ord != Ordering::Less);
    }

    #[test]
    fn signed_ordering_matches_integer(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (SignedSid::new(a), SignedSid::new(b));
        prop_assert_eq!(x.compare(&y), a.cmp(&b));
        prop_assert_eq!(x < y, a < b);
    }

    #[test]
    fn scan_forms_agree(n in 1..=i64::MAX) {
        let text = n.to_string();
        let expected = Sid::new(n as u64);
        let inputs: [ScanValue<'_>; 6] = [
            ScanValue::Text(&text),
            ScanValue::Bytes(text.as_bytes()),
            ScanValue::I64(n),
            ScanValue::U64(n as u64),
            ScanValue::Id(expected),
            ScanValue::IdRef(Some(&expected)),
        ];
        for input in inputs {
            prop_assert_eq!(Sid::scan(input).unwrap(), expected);
        }
    }

    #[test]
    fn signed_from_u64_overflows_above_max(n in (i64::MAX as u64 + 1)..=u64::MAX) {
        prop_assert!(SignedSid::from_u64(n).unwrap_err().is_overflow());
    }

    #[test]
    fn sort_reversed(len in 0usize..300) {
        let mut ids: Ids = (0..len as u64).rev().map(Sid::new).collect();
        ids.sort();
        prop_assert!(ids.is_sorted());
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(ids.len(), len);
    }

    #[test]
    fn sort_arbitrary(values in proptest::collection::vec(any::<u64>(), 0..100)) {
        let mut ids: Ids = values.iter().copied().map(Sid::new).collect();
        ids.sort();

        let mut expected = values;
        expected.sort_unstable();
        let sorted: Vec<u64> = ids.iter().map(|id| id.value()).collect();
        prop_assert_eq!(sorted, expected);
    }
}

#[test]
fn zero_only_from_zero() {
    assert!(Sid::new(0).is_zero());
    assert!(Sid::from_text("").unwrap().is_zero());
    assert!(Sid::from_json(b"").unwrap().is_zero());
    assert!(Sid::from_json(br#""""#).unwrap().is_zero());
    assert!(!Sid::from_text("1").unwrap().is_zero());
}

#[test]
fn overflow_boundary() {
    let max = i64::MAX as u64;
    assert!(SignedSid::from_u64(max).is_ok());
    assert!(SignedSid::from_u64(max + 1).unwrap_err().is_overflow());
}
