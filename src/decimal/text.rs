use std::fmt;
use std::str::FromStr;

use num::Zero;

use super::fields::Fields;
use super::packed::Decimal;
use super::parse_decimal_error::ParseDecimalError;
use crate::num_ops;
use crate::zero_pad::{pad_left, pad_right};

/// Formats the decimal in plain positional notation, always with at least one digit on each
/// side of the decimal point: `(15, 4)` is `150000.0`, `(-15, -4)` is `-0.0015`.
impl<F: Fields> fmt::Display for Decimal<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let (is_negative, exponent, significand) = self.parts();

        let sign = if is_negative { "-" } else { "" };

        let pos_decimal_str = if significand.is_zero() {
            "0.0".to_string()
        } else {
            let digits = significand.to_string();
            let num_significant_digits = digits.len() as i32;
            // position of the decimal point, counted from the most significant digit
            let point = exponent + num_significant_digits;

            if exponent >= 0 {
                pad_right(&digits, exponent as usize) + ".0"
            } else if point > 0 {
                let (left, right) = digits.split_at(point as usize);
                format!("{}.{}", left, right)
            } else {
                "0.".to_string() + &pad_left(&digits, (-point) as usize)
            }
        };

        write!(formatter, "{}{}", sign, pos_decimal_str)
    }
}

struct Scanned<F: Fields> {
    value: Decimal<F>,
    consumed: usize,
    num_digits: usize,
}

/// Scans the longest prefix of `bytes` shaped like `-?[0-9]*(\.[0-9]*)?`.
///
/// Integer digits that no longer fit the significand are dropped and counted in the exponent
/// instead. Fractional digits are dropped once the exponent is positive; otherwise they are
/// folded in unchecked and the result is masked like any other significand.
fn scan<F: Fields>(bytes: &[u8]) -> Scanned<F> {
    let mut pos = 0;
    let is_negative = bytes.first() == Some(&b'-');
    if is_negative {
        pos += 1;
    }

    let mut significand = F::Word::zero();
    let mut exponent: i32 = 0;
    let mut num_digits = 0;

    while let Some(digit) = bytes.get(pos).and_then(|&b| num_ops::decimal_digit(b)) {
        // once a digit has overflowed, every later one only moves the exponent
        let pushed = if exponent == 0 {
            num_ops::push_decimal_digit(significand, digit, F::SIGNIFICAND_MASK)
        } else {
            None
        };
        match pushed {
            Some(pushed) => significand = pushed,
            None => exponent = exponent.saturating_add(1),
        }
        num_digits += 1;
        pos += 1;
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(digit) = bytes.get(pos).and_then(|&b| num_ops::decimal_digit(b)) {
            if exponent <= 0 {
                significand = num_ops::wrapping_push_decimal_digit(significand, digit);
                exponent = exponent.saturating_sub(1);
            }
            num_digits += 1;
            pos += 1;
        }
    }

    Scanned {
        value: Decimal::from_data(is_negative, exponent, significand),
        consumed: pos,
        num_digits,
    }
}

impl<F: Fields> Decimal<F> {
    /// Parses the longest decimal prefix of `s`, returning the value and the number of bytes
    /// consumed.
    ///
    /// Parsing never fails: a prefix without digits yields a zero significand at exponent 0.
    /// Digits that do not fit the significand are truncated, never rounded. Compare the
    /// consumed length against `s.len()` to detect trailing input, or use `str::parse` for the
    /// strict form.
    pub fn parse(s: &str) -> (Decimal<F>, usize) {
        let scanned = scan::<F>(s.as_bytes());
        (scanned.value, scanned.consumed)
    }
}

impl<F: Fields> FromStr for Decimal<F> {
    type Err = ParseDecimalError;

    /// Like [`Decimal::parse`], but the whole string must be consumed and hold at least one
    /// digit.
    fn from_str(s: &str) -> Result<Decimal<F>, ParseDecimalError> {
        let scanned = scan::<F>(s.as_bytes());
        if scanned.consumed < s.len() {
            Err(ParseDecimalError::InvalidDigit { position: scanned.consumed })
        } else if scanned.num_digits == 0 {
            Err(ParseDecimalError::Empty)
        } else {
            Ok(scanned.value)
        }
    }
}
