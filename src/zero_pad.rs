pub fn zero_str(num_zeros: usize) -> String {
    "0".repeat(num_zeros)
}

pub fn pad_left(s: &str, num_zeros: usize) -> String {
    zero_str(num_zeros) + s
}

pub fn pad_right(s: &str, num_zeros: usize) -> String {
    s.to_string() + &zero_str(num_zeros)
}
