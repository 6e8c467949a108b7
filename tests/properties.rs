use packed_decimal::{d32, d64};
use proptest::prelude::*;

const MASK_32: u32 = 0x1F_FFFF;
const MASK_64: u64 = 0x3_FFFF_FFFF_FFFF;

fn any_d32() -> impl Strategy<Value = d32> {
    any::<u32>().prop_map(d32::from_bin)
}

fn any_d64() -> impl Strategy<Value = d64> {
    any::<u64>().prop_map(d64::from_bin)
}

// Composing and decomposing agree, modulo the significand mask
proptest! {
    #[test]
    fn prop_parts_round_trip_32(magnitude in any::<u32>(), exponent in -127i32..=128, sign in any::<bool>()) {
        let d = d32::from_data(sign, exponent, magnitude);
        prop_assert_eq!((sign, exponent, magnitude & MASK_32), d.parts());
    }

    #[test]
    fn prop_parts_round_trip_64(magnitude in any::<u64>(), exponent in -1023i32..=1024, sign in any::<bool>()) {
        let d = d64::from_data(sign, exponent, magnitude);
        prop_assert_eq!((sign, exponent, magnitude & MASK_64), d.parts());
    }

    #[test]
    fn prop_from_signed_matches_from_data(value in any::<i32>(), exponent in -127i32..=127) {
        let d = d32::from_signed(value, exponent);
        let expected = d32::from_data(value < 0, exponent, value.unsigned_abs());
        prop_assert_eq!(expected, d);
    }
}

// Equality is word equality
proptest! {
    #[test]
    fn prop_eq_matches_words(a in any_d32(), b in any_d32()) {
        prop_assert_eq!(a.data() == b.data(), a == b);
    }

    #[test]
    fn prop_eq_is_exponent_sensitive(
        significand in 0u32..=MASK_32,
        e1 in -127i32..=127,
        e2 in -127i32..=127,
    ) {
        prop_assume!(e1 != e2);
        prop_assert_ne!(d32::from_data(false, e1, significand), d32::from_data(false, e2, significand));
    }
}

// Negation only touches the sign bit
proptest! {
    #[test]
    fn prop_neg_involution(x in any_d32(), y in any_d64()) {
        prop_assert_eq!(x, -(-x));
        prop_assert_eq!(y, -(-y));
    }

    #[test]
    fn prop_neg_keeps_magnitude(x in any_d32()) {
        let n = -x;
        prop_assert_ne!(x.sign(), n.sign());
        prop_assert_eq!(x.exponent(), n.exponent());
        prop_assert_eq!(x.significand(), n.significand());
    }
}

// Additive identity is bit-identical
proptest! {
    #[test]
    fn prop_zero_plus_x(x in any_d32(), y in any_d64()) {
        prop_assert_eq!(x, d32::new() + x);
        prop_assert_eq!(y, d64::new() + y);
    }

    #[test]
    fn prop_x_plus_zero(x in any_d32()) {
        prop_assume!(x.significand() != 0);
        prop_assert_eq!(x, x + d32::new());
        prop_assert_eq!(x, x - d32::new());
    }
}

// Arithmetic at a shared exponent
proptest! {
    #[test]
    fn prop_add_commutes_at_shared_exponent(
        a in -(MASK_32 as i32)..=(MASK_32 as i32),
        b in -(MASK_32 as i32)..=(MASK_32 as i32),
        exponent in -127i32..=127,
    ) {
        let a = d32::from_signed(a, exponent);
        let b = d32::from_signed(b, exponent);
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_sub_is_add_of_negation(
        a in 1i64..=(MASK_64 as i64 / 2),
        b in 1i64..=(MASK_64 as i64 / 2),
        exponent in -1023i32..=1023,
    ) {
        let a = d64::from_signed(a, exponent);
        let b = d64::from_signed(b, exponent);
        prop_assert_eq!(a - b, a + (-b));
        prop_assert_eq!(a, (a + b) - b);
    }

    #[test]
    fn prop_mismatched_exponents_keep_left(
        a in 1i32..=(MASK_32 as i32),
        b in 1i32..=(MASK_32 as i32),
        e1 in -127i32..=127,
        e2 in -127i32..=127,
    ) {
        prop_assume!(e1 != e2);
        let a = d32::from_signed(a, e1);
        let b = d32::from_signed(b, e2);
        prop_assert_eq!(a, a + b);
        prop_assert_eq!(a, a - b);
    }
}

// Text round trip, for values the parser does not have to truncate
proptest! {
    #[test]
    fn prop_fmt_parse_round_trip(
        significand in 1u32..=MASK_32,
        exponent in -40i32..=-1,
        sign in any::<bool>(),
    ) {
        let d = d32::from_data(sign, exponent, significand);
        let s = d.to_string();
        prop_assert_eq!((d, s.len()), d32::parse(&s));
        prop_assert_eq!(Ok(d), s.parse::<d32>());
    }

    #[test]
    fn prop_fmt_parse_round_trip_64(
        significand in 1u64..=MASK_64,
        exponent in -300i32..=-1,
        sign in any::<bool>(),
    ) {
        let d = d64::from_data(sign, exponent, significand);
        prop_assert_eq!(Ok(d), d.to_string().parse::<d64>());
    }

    #[test]
    fn prop_parse_never_overruns(s in "\\PC*") {
        let (_, consumed) = d32::parse(&s);
        prop_assert!(consumed <= s.len());
    }

    #[test]
    fn prop_strict_parse_agrees_with_prefix_parse(s in "-?[0-9]{0,12}(\\.[0-9]{0,12})?") {
        let (d, consumed) = d32::parse(&s);
        prop_assert_eq!(s.len(), consumed);
        if s.bytes().any(|b| b.is_ascii_digit()) {
            prop_assert_eq!(Ok(d), s.parse::<d32>());
        } else {
            prop_assert!(s.parse::<d32>().is_err());
        }
    }
}
