//! Fixed-width decimal numbers packed into a single unsigned word.
//!
//! A value is `(-1)^sign × significand × 10^exponent`, stored IEEE-754 style as a sign bit, a
//! biased exponent field and a significand field. Two widths share one generic implementation:
//!
//! - [`d32`]: 8-bit exponent (bias 127), 21-bit significand.
//! - [`d64`]: 11-bit exponent (bias 1023), 50-bit significand.
//!
//! Values compare by their packed words, so the same quantity at two different exponents is two
//! different values. Addition and subtraction only combine operands that share an exponent.
//!
//! ```
//! use packed_decimal::d32;
//!
//! let a: d32 = "-0.2".parse().unwrap();
//! let b = d32::from_signed(1, -1);
//! assert_eq!(d32::from_signed(-1, -1), a + b);
//! assert_eq!("-0.1", (a + b).to_string());
//! ```

mod bit_ops;
pub mod decimal;
mod num_ops;
mod zero_pad;

pub use decimal::{d32, d64, Decimal, Fields, ParseDecimalError, W32, W64};
