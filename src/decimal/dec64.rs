use super::fields::W64;
use super::packed::Decimal;

/// A decimal packed into 64 bits: 1 sign bit, 11 exponent bits biased by 1023, and a 50-bit
/// significand (of a 52-bit field), i.e. up to 15 full decimal digits.
#[allow(non_camel_case_types)]
pub type d64 = Decimal<W64>;

pub mod consts {
    use std::marker::PhantomData;

    use super::d64;

    pub const ZERO: d64 = d64 { bits: 0x3FF0_0000_0000_0000, width: PhantomData };
    pub const ONE: d64 = d64 { bits: 0x3FF0_0000_0000_0001, width: PhantomData };
    pub const NEG_ONE: d64 = d64 { bits: 0xBFF0_0000_0000_0001, width: PhantomData };

    /// Largest significand at exponent 0.
    pub const MAX_INTEGER: d64 = d64 { bits: 0x3FF3_FFFF_FFFF_FFFF, width: PhantomData };
}
