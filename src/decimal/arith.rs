use std::ops;

use num::traits::AsPrimitive;
use num::Zero;

use super::fields::Fields;
use super::packed::Decimal;
use crate::bit_ops;

/// Applies the sign to a significand, in the signed integer of the same width.
///
/// Significands are masked well below the sign bit, so neither the negation nor a later sum of
/// two of these can overflow.
fn signed_significand<F: Fields>(is_negative: bool, significand: F::Word) -> F::Signed {
    let magnitude: F::Signed = <F::Word as AsPrimitive<F::Signed>>::as_(significand);
    if is_negative {
        -magnitude
    } else {
        magnitude
    }
}

impl<F: Fields> ops::Neg for Decimal<F> {
    type Output = Decimal<F>;

    /// Flips the sign bit, leaving exponent and significand untouched. Zero is no exception.
    fn neg(self) -> Decimal<F> {
        Decimal::from_bin(bit_ops::toggle_bit(self.bits, F::SIGN_OFFSET))
    }
}

/// Exponents are never aligned: operands with non-zero significands and different exponents
/// leave the left operand unchanged.
impl<F: Fields> ops::Add<Decimal<F>> for Decimal<F> {
    type Output = Decimal<F>;

    fn add(self, other: Decimal<F>) -> Decimal<F> {
        let (left_is_neg, left_exponent, left_significand) = self.parts();
        let (right_is_neg, right_exponent, right_significand) = other.parts();

        if left_significand.is_zero() {
            other
        } else if right_significand.is_zero() {
            self
        } else if left_exponent == right_exponent {
            let sum = signed_significand::<F>(left_is_neg, left_significand)
                + signed_significand::<F>(right_is_neg, right_significand);
            Decimal::from_signed(sum, left_exponent)
        } else {
            self
        }
    }
}

/// Same fallbacks as addition, except that a zero left operand yields the negated right
/// significand at the left operand's exponent.
impl<F: Fields> ops::Sub<Decimal<F>> for Decimal<F> {
    type Output = Decimal<F>;

    fn sub(self, other: Decimal<F>) -> Decimal<F> {
        let (left_is_neg, left_exponent, left_significand) = self.parts();
        let (right_is_neg, right_exponent, right_significand) = other.parts();

        if left_significand.is_zero() {
            Decimal::from_data(!right_is_neg, left_exponent, right_significand)
        } else if right_significand.is_zero() {
            self
        } else if left_exponent == right_exponent {
            let difference = signed_significand::<F>(left_is_neg, left_significand)
                - signed_significand::<F>(right_is_neg, right_significand);
            Decimal::from_signed(difference, left_exponent)
        } else {
            self
        }
    }
}

impl<F: Fields> ops::AddAssign<Decimal<F>> for Decimal<F> {
    fn add_assign(&mut self, other: Decimal<F>) {
        *self = *self + other;
    }
}

impl<F: Fields> ops::SubAssign<Decimal<F>> for Decimal<F> {
    fn sub_assign(&mut self, other: Decimal<F>) {
        *self = *self - other;
    }
}
