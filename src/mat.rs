//! Math helpers behind the `mat` command group.

/// Add two integers.
pub fn addition(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Subtract `b` from `a`.
pub fn subtraction(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}
