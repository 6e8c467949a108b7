use std::fmt;
use std::hash::Hash;

use num::traits::{AsPrimitive, WrappingAdd, WrappingMul};
use num::{PrimInt, Unsigned};

/// Per-width layout of a packed decimal word.
///
/// A word is laid out, from the MSB down, as one sign bit, `EXPONENT_WIDTH` bits of biased
/// exponent, and the significand field. Only the low bits selected by `SIGNIFICAND_MASK` of the
/// significand field are ever populated; the rest of the field is headroom and stays zero.
pub trait Fields: Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Hash + 'static {
    /// Unsigned storage for the packed word.
    type Word: PrimInt
        + Unsigned
        + WrappingAdd
        + WrappingMul
        + Hash
        + fmt::Debug
        + fmt::Display
        + fmt::LowerHex
        + From<u8>
        + From<u32>
        + AsPrimitive<u32>
        + AsPrimitive<Self::Signed>;

    /// Signed integer of the same width, used for signed significand arithmetic.
    type Signed: PrimInt + num::Signed + fmt::Debug + AsPrimitive<Self::Word>;

    const WIDTH: usize;
    const EXPONENT_WIDTH: usize;

    const SIGN_OFFSET: usize = Self::WIDTH - 1;
    const EXPONENT_OFFSET: usize = Self::WIDTH - 1 - Self::EXPONENT_WIDTH;

    const EXPONENT_BIAS: i32 = (1 << (Self::EXPONENT_WIDTH - 1)) - 1;
    const EXPONENT_MASK: u32 = (1 << Self::EXPONENT_WIDTH) - 1;

    const SIGNIFICAND_MASK: Self::Word;

    /// Name used by `Debug`.
    const NAME: &'static str;
}

/// 32-bit layout: 8 exponent bits, 21 of the 23 significand bits in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct W32;

impl Fields for W32 {
    type Word = u32;
    type Signed = i32;

    const WIDTH: usize = 32;
    const EXPONENT_WIDTH: usize = 8;

    const SIGNIFICAND_MASK: u32 = 0x1F_FFFF;

    const NAME: &'static str = "d32";
}

/// 64-bit layout: 11 exponent bits, 50 of the 52 significand bits in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct W64;

impl Fields for W64 {
    type Word = u64;
    type Signed = i64;

    const WIDTH: usize = 64;
    const EXPONENT_WIDTH: usize = 11;

    const SIGNIFICAND_MASK: u64 = 0x3_FFFF_FFFF_FFFF;

    const NAME: &'static str = "d64";
}
