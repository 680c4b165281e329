//! CPU reference kernels for fixed-point dot-product and 1-D convolution.
//!
//! Both kernels apply the arithmetic right shift to each product term
//! before summation, never to the finished sum. That ordering changes the
//! rounding of negative products and must match the accelerator bit for
//! bit, so it is normative here. Accumulation is 64-bit signed to keep
//! intermediate sums from overflowing.

/// Computes the dot-product reduction `sum_i (a[i] * b[i]) >> shift`.
///
/// Returns the full 64-bit accumulator. The hardware path truncates its
/// scalar result to 32 bits on the way into the output bank; callers that
/// compare against it truncate this value the same way.
///
/// # Panics
///
/// Debug builds panic if the operand slices differ in length; callers are
/// expected to have validated the descriptor first.
pub fn dot(a: &[i32], b: &[i32], shift: u32) -> i64 {
    debug_assert_eq!(a.len(), b.len());
    let mut acc: i64 = 0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        acc += (x as i64 * y as i64) >> shift;
    }
    acc
}

/// Computes the sliding-window convolution into `y`.
///
/// For each output index `o`, accumulates `(x[o + j] * k[j]) >> shift` over
/// the kernel in a 64-bit accumulator and truncates the result to 32 bits,
/// exactly as the accelerator writes its output bank. `x` must hold at
/// least `y.len() + k.len() - 1` samples.
pub fn conv1d(x: &[i32], k: &[i32], y: &mut [i32], shift: u32) {
    for (o, out) in y.iter_mut().enumerate() {
        let mut acc: i64 = 0;
        for (j, &kj) in k.iter().enumerate() {
            acc += (x[o + j] as i64 * kj as i64) >> shift;
        }
        *out = acc as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern;

    #[test]
    fn dot_shift_applies_per_term() {
        // (3*5)>>2 + (7*9)>>2 = 3 + 15, not (15+63)>>2 = 19.
        assert_eq!(dot(&[3, 7], &[5, 9], 2), 18);
    }

    #[test]
    fn dot_negative_products_shift_arithmetically() {
        // -15 >> 2 floors to -4.
        assert_eq!(dot(&[-3], &[5], 2), -4);
    }

    #[test]
    fn dot_zero_shift_is_plain_mac() {
        let mut a = [0i32; 8];
        let mut b = [0i32; 8];
        pattern::ramp_a(&mut a);
        pattern::ramp_b(&mut b);
        let expect: i64 = a.iter().zip(&b).map(|(&x, &y)| x as i64 * y as i64).sum();
        assert_eq!(dot(&a, &b, 0), expect);
    }

    #[test]
    fn conv_matches_direct_expansion() {
        let x = [1, 2, 3, 4, 5, 6];
        let k = [1, 0, -1];
        let mut y = [0i32; 4];
        conv1d(&x, &k, &mut y, 0);
        assert_eq!(y, [1 - 3, 2 - 4, 3 - 5, 4 - 6]);
    }

    #[test]
    fn shift_31_truncates_toward_floor_without_overflow() {
        let a = [0xFFFF; 4];
        let b = [0xFFFF; 4];
        // Each product is 0xFFFE0001 < 2^32; >> 31 leaves 1 per term.
        assert_eq!(dot(&a, &b, 31), 4);
    }
}
