use num::traits::{WrappingAdd, WrappingMul};
use num::{PrimInt, Unsigned};

/// Shifts `digit` into the low end of `num` (`num * 10 + digit`).
///
/// Returns `None` if the result would exceed `limit`.
pub fn push_decimal_digit<T>(num: T, digit: u8, limit: T) -> Option<T>
where
    T: PrimInt + Unsigned + From<u8>,
{
    let ten = <T as From<u8>>::from(10);
    let pushed = num.checked_mul(&ten)?.checked_add(&<T as From<u8>>::from(digit))?;
    if pushed > limit {
        None
    } else {
        Some(pushed)
    }
}

/// Shifts `digit` into the low end of `num`, wrapping at the width of `T`.
pub fn wrapping_push_decimal_digit<T>(num: T, digit: u8) -> T
where
    T: PrimInt + Unsigned + WrappingAdd + WrappingMul + From<u8>,
{
    let ten = <T as From<u8>>::from(10);
    num.wrapping_mul(&ten).wrapping_add(&<T as From<u8>>::from(digit))
}

/// Returns the value of an ASCII decimal digit, or `None` for any other byte.
pub fn decimal_digit(byte: u8) -> Option<u8> {
    if byte.is_ascii_digit() {
        Some(byte - b'0')
    } else {
        None
    }
}
