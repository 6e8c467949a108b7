use super::fields::W32;
use super::packed::Decimal;

/// A decimal packed into 32 bits: 1 sign bit, 8 exponent bits biased by 127, and a 21-bit
/// significand (of a 23-bit field), i.e. up to 7 decimal digits (±2,097,151 × 10^e).
#[allow(non_camel_case_types)]
pub type d32 = Decimal<W32>;

pub mod consts {
    use std::marker::PhantomData;

    use super::d32;

    pub const ZERO: d32 = d32 { bits: 0b0_01111111_00000000000000000000000, width: PhantomData };
    pub const ONE: d32 = d32 { bits: 0b0_01111111_00000000000000000000001, width: PhantomData };
    pub const NEG_ONE: d32 = d32 { bits: 0b1_01111111_00000000000000000000001, width: PhantomData };

    /// Largest significand at exponent 0.
    pub const MAX_INTEGER: d32 = d32 { bits: 0b0_01111111_00111111111111111111111, width: PhantomData };
}
