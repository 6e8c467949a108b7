use num::PrimInt;

/// Returns the field starting at bit `offset` (0-based from the LSB), masked with `mask`.
///
/// `mask` is expressed relative to the field, i.e. already shifted down to bit 0.
pub fn get_field<T: PrimInt>(bits: T, offset: usize, mask: T) -> T {
    (bits >> offset) & mask
}

/// Places `value`, masked with `mask`, at bit `offset`.
pub fn put_field<T: PrimInt>(value: T, offset: usize, mask: T) -> T {
    (value & mask) << offset
}

pub fn get_bit<T: PrimInt>(bits: T, bit_index: usize) -> bool {
    get_field(bits, bit_index, T::one()) != T::zero()
}

pub fn clear_bit<T: PrimInt>(bits: T, bit_index: usize) -> T {
    let mask = !(T::one() << bit_index);
    bits & mask
}

pub fn toggle_bit<T: PrimInt>(bits: T, bit_index: usize) -> T {
    let mask = T::one() << bit_index;
    bits ^ mask
}
