use std::fmt;
use std::marker::PhantomData;

use num::traits::AsPrimitive;
use num::{One, ToPrimitive, Zero};

use super::fields::Fields;
use crate::bit_ops;

/// A decimal number packed into a single unsigned word.
///
/// The value is `(-1)^sign × significand × 10^exponent`. The sign is stored apart from the
/// significand (sign-magnitude), and the exponent is stored biased by `F::EXPONENT_BIAS`.
///
/// Equality is equality of the packed words: `1.0` stored as `(10, -1)` is not equal to `1.0`
/// stored as `(1, 0)`, and `-0.0` is not equal to `0.0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal<F: Fields> {
    pub(crate) bits: F::Word,
    pub(crate) width: PhantomData<F>,
}

impl<F: Fields> Decimal<F> {
    /// Creates and initializes a representation of zero (`0.0`).
    pub fn new() -> Decimal<F> {
        Decimal::from_data(false, 0, F::Word::zero())
    }

    /// Creates a decimal from its parts: the sign, exponent, and significand, respectively.
    ///
    /// The stored exponent is `(exponent + bias) mod 2^EXPONENT_WIDTH`, and the significand is
    /// masked to `F::SIGNIFICAND_MASK`. Both truncations are silent; see
    /// [`checked_from_data`](Self::checked_from_data) for the strict variant.
    pub fn from_data(is_negative: bool, exponent: i32, significand: F::Word) -> Decimal<F> {
        let sign_field = if is_negative {
            F::Word::one() << F::SIGN_OFFSET
        } else {
            F::Word::zero()
        };
        let biased_exponent = <F::Word as From<u32>>::from(exponent.wrapping_add(F::EXPONENT_BIAS) as u32);
        let exponent_mask = <F::Word as From<u32>>::from(F::EXPONENT_MASK);
        let exponent_field = bit_ops::put_field(biased_exponent, F::EXPONENT_OFFSET, exponent_mask);
        let significand_field = significand & F::SIGNIFICAND_MASK;

        Decimal::from_bin(sign_field | exponent_field | significand_field)
    }

    /// Like [`from_data`](Self::from_data), but returns `None` instead of truncating.
    ///
    /// Fails if the significand does not fit the mask, or if the biased exponent is outside the
    /// field or lands on the reserved (not normal) pattern.
    pub fn checked_from_data(is_negative: bool, exponent: i32, significand: F::Word) -> Option<Decimal<F>> {
        if significand > F::SIGNIFICAND_MASK {
            return None;
        }
        let biased_exponent = exponent.checked_add(F::EXPONENT_BIAS)?;
        if biased_exponent < 0 || biased_exponent >= F::EXPONENT_MASK as i32 {
            return None;
        }
        Some(Decimal::from_data(is_negative, exponent, significand))
    }

    /// Creates a decimal from a signed integer value scaled by `10^exponent`.
    pub fn from_signed(value: F::Signed, exponent: i32) -> Decimal<F> {
        let is_negative = value < F::Signed::zero();
        let bits: F::Word = value.as_();
        // Negate in the unsigned domain so that `Signed::MIN` cannot overflow.
        let magnitude = if is_negative { (!bits) + F::Word::one() } else { bits };
        Decimal::from_data(is_negative, exponent, magnitude)
    }

    /// Returns a decimal with the exact bits passed in through `data`.
    pub fn from_bin(data: F::Word) -> Decimal<F> {
        Decimal { bits: data, width: PhantomData }
    }

    /// The raw packed word.
    pub fn data(&self) -> F::Word {
        self.bits
    }

    /// Returns true if the sign bit is set.
    pub fn sign(&self) -> bool {
        bit_ops::get_bit(self.bits, F::SIGN_OFFSET)
    }

    /// The true (unbiased) exponent.
    pub fn exponent(&self) -> i32 {
        (self.exponent_field() as i32) - F::EXPONENT_BIAS
    }

    /// The significand magnitude.
    pub fn significand(&self) -> F::Word {
        self.bits & F::SIGNIFICAND_MASK
    }

    /// Returns the three defining pieces of the decimal - the sign (true if negative), the
    /// exponent, and the significand, respectively.
    pub fn parts(&self) -> (bool, i32, F::Word) {
        (self.sign(), self.exponent(), self.significand())
    }

    /// Returns false if the exponent field holds the reserved all-ones pattern.
    pub fn is_normal(&self) -> bool {
        self.exponent_field() != F::EXPONENT_MASK
    }

    pub fn is_sign_negative(&self) -> bool {
        self.sign()
    }

    pub fn is_sign_positive(&self) -> bool {
        !self.sign()
    }

    /// Returns a copy of this decimal with the sign bit turned off.
    pub fn abs(&self) -> Decimal<F> {
        Decimal::from_bin(bit_ops::clear_bit(self.bits, F::SIGN_OFFSET))
    }

    /// Lossy conversion, mostly useful for display and debugging.
    pub fn to_f64(&self) -> f64 {
        let (is_negative, exponent, significand) = self.parts();
        let multiplier = if is_negative { -1.0 } else { 1.0 };
        let significand = significand.to_f64().unwrap_or(f64::NAN);
        multiplier * 10f64.powi(exponent) * significand
    }

    fn exponent_field(&self) -> u32 {
        let exponent_mask = <F::Word as From<u32>>::from(F::EXPONENT_MASK);
        let field = bit_ops::get_field(self.bits, F::EXPONENT_OFFSET, exponent_mask);
        <F::Word as AsPrimitive<u32>>::as_(field)
    }
}

impl<F: Fields> Default for Decimal<F> {
    fn default() -> Decimal<F> {
        Decimal::new()
    }
}

impl<F: Fields> Zero for Decimal<F> {
    fn zero() -> Decimal<F> {
        Decimal::new()
    }

    /// True for any significand of zero, regardless of sign or exponent.
    fn is_zero(&self) -> bool {
        self.significand().is_zero()
    }
}

impl<F: Fields> fmt::Debug for Decimal<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let (is_negative, exponent, significand) = self.parts();
        if self.is_normal() {
            write!(formatter,
                   "{} {{ is_negative: {}, exponent: {}, significand: {} }}",
                   F::NAME,
                   is_negative,
                   exponent,
                   significand)
        } else {
            write!(formatter, "{} {{ not normal, bits: {:#x} }}", F::NAME, self.bits)
        }
    }
}
