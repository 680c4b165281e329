//! Deterministic operand vector generator.
//!
//! Every benchmark and every equivalence test draws its inputs from the two
//! ramp formulas below. They are the only source of operand data in the
//! system, so they must not change: recorded results and the hardware
//! testbench both assume them.

/// Fills `buf` with the A-side ramp: `a[i] = (i * 13) mod 65536`.
///
/// Values are masked to 16 bits before the cast, so every element is a
/// non-negative `i32` with small magnitude. This keeps 64-bit accumulators
/// far from overflow even at the largest bank-sized runs.
pub fn ramp_a(buf: &mut [i32]) {
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = ((i as u32).wrapping_mul(13) & 0xFFFF) as i32;
    }
}

/// Fills `buf` with the B-side ramp: `b[i] = ((n - i) * 7) mod 65536`.
///
/// `n` is the buffer length. For dot mode both operands are generated over
/// the same `n`; for conv mode the kernel bank is generated over `klen`
/// samples, independent of the window length.
pub fn ramp_b(buf: &mut [i32]) {
    let n = buf.len() as u32;
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = ((n - i as u32).wrapping_mul(7) & 0xFFFF) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_a_matches_formula() {
        let mut a = [0i32; 8];
        ramp_a(&mut a);
        for (i, &v) in a.iter().enumerate() {
            assert_eq!(v, ((i * 13) & 0xFFFF) as i32);
        }
    }

    #[test]
    fn ramp_b_matches_formula() {
        let mut b = [0i32; 8];
        ramp_b(&mut b);
        for (i, &v) in b.iter().enumerate() {
            assert_eq!(v, (((8 - i) * 7) & 0xFFFF) as i32);
        }
    }

    #[test]
    fn ramp_a_wraps_at_16_bits() {
        let mut a = [0i32; 6000];
        ramp_a(&mut a);
        // 5042 * 13 = 65546 -> wraps to 10
        assert_eq!(a[5042], 10);
        assert!(a.iter().all(|&v| (0..=0xFFFF).contains(&v)));
    }
}
