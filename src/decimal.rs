mod arith;
pub mod dec32;
pub mod dec64;
mod fields;
mod packed;
mod parse_decimal_error;
#[cfg(feature = "serde")]
mod serde_impl;
mod text;

pub use self::dec32::d32;
pub use self::dec64::d64;
pub use self::fields::{Fields, W32, W64};
pub use self::packed::Decimal;
pub use self::parse_decimal_error::ParseDecimalError;
