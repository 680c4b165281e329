//! CPU-vs-accelerator equivalence over the bus-handshake binding.
//!
//! Every run draws its operands from the deterministic generator, so the
//! expected values are fully reproducible. The accelerator's truncated
//! 32-bit outputs must equal the CPU kernel's correspondingly truncated
//! outputs for every output index.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vmac_core::MacError;
use vmac_core::bench;
use vmac_core::clock::SteppingClock;
use vmac_core::driver::AccelDriver;
use vmac_core::{kernel, pattern};
use vmac_hw::{HandshakeBus, VectorMac};

fn fresh_driver() -> AccelDriver<HandshakeBus> {
    AccelDriver::new(HandshakeBus::new(VectorMac::new()))
}

#[test]
fn dot_n8_shift15_matches_cpu_reference() {
    let mut driver = fresh_driver();
    let mut clk = SteppingClock::new(100);
    let mut a = [0i32; 8];
    let mut b = [0i32; 8];

    let report = bench::run_dot(&mut driver, &mut clk, 8, 15, &mut a, &mut b, Some(1_000_000))
        .expect("valid descriptor");

    // The orchestrator regenerates the same operands internally.
    let mut ea = [0i32; 8];
    let mut eb = [0i32; 8];
    pattern::ramp_a(&mut ea);
    pattern::ramp_b(&mut eb);
    let expect = kernel::dot(&ea, &eb, 15);

    assert!(!report.timed_out);
    assert_eq!(report.cpu_result, expect);
    assert_eq!(report.acc_result, expect as i32);
    assert!(report.matched());
}

#[test]
fn conv_out4_klen3_shift15_matches_cpu_reference() {
    let mut driver = fresh_driver();
    let mut clk = SteppingClock::new(100);
    let mut x = [0i32; 7];
    let mut k = [0i32; 3];
    let mut y = [0i32; 4];

    let report = bench::run_conv(
        &mut driver,
        &mut clk,
        4,
        3,
        15,
        &mut x,
        &mut k,
        &mut y,
        Some(1_000_000),
    )
    .expect("valid descriptor");

    assert!(!report.timed_out);
    assert_eq!(report.mismatches, 0);
    assert_eq!(report.y0_acc, report.y0_cpu);
    assert_eq!(report.y1_acc, report.y1_cpu);
}

#[test]
fn dot_n1024_equivalence_holds_at_scale() {
    let mut driver = fresh_driver();
    let mut clk = SteppingClock::new(100);
    let mut a = vec![0i32; 1024];
    let mut b = vec![0i32; 1024];

    let report = bench::run_dot(
        &mut driver,
        &mut clk,
        1024,
        15,
        &mut a,
        &mut b,
        Some(1_000_000),
    )
    .expect("valid descriptor");

    assert!(report.matched());
    assert!(report.speedup().is_finite());
    assert!(report.speedup() > 0.0);
}

#[test]
fn shift_31_truncates_without_overflow() {
    let mut driver = fresh_driver();
    let mut clk = SteppingClock::new(100);
    let mut a = [0i32; 64];
    let mut b = [0i32; 64];

    let report = bench::run_dot(&mut driver, &mut clk, 64, 31, &mut a, &mut b, Some(1_000_000))
        .expect("valid descriptor");

    assert!(report.matched());
    // Generated products stay below 2^32, so every shifted term is 0 or 1.
    assert!(report.cpu_result >= 0 && report.cpu_result <= 64);
}

#[test]
fn degenerate_descriptors_rejected_before_protocol() {
    let mut driver = fresh_driver();
    let mut clk = SteppingClock::new(100);
    let mut buf = [0i32; 8];
    let mut buf2 = [0i32; 8];
    let mut y = [0i32; 8];

    let r = bench::run_dot(&mut driver, &mut clk, 0, 15, &mut buf, &mut [], Some(1));
    assert_eq!(r.unwrap_err(), MacError::ZeroLength);

    let r = bench::run_conv(
        &mut driver,
        &mut clk,
        4,
        0,
        15,
        &mut buf,
        &mut [],
        &mut y,
        Some(1),
    );
    assert_eq!(r.unwrap_err(), MacError::ZeroKernel);

    let r = bench::run_dot(&mut driver, &mut clk, 8, 32, &mut buf, &mut buf2, Some(1));
    assert_eq!(r.unwrap_err(), MacError::ShiftOutOfRange);
}

#[test]
fn randomized_descriptors_stay_equivalent() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut clk = SteppingClock::new(100);

    for _ in 0..20 {
        let shift = rng.gen_range(0..=31);
        if rng.gen_bool(0.5) {
            let n = rng.gen_range(1..=256u32);
            let mut a = vec![0i32; n as usize];
            let mut b = vec![0i32; n as usize];
            let mut driver = fresh_driver();
            let report =
                bench::run_dot(&mut driver, &mut clk, n, shift, &mut a, &mut b, Some(1_000_000))
                    .expect("valid descriptor");
            assert!(report.matched(), "dot n={} shift={}", n, shift);
        } else {
            let out_len = rng.gen_range(1..=128u32);
            let klen = rng.gen_range(1..=16u32);
            let mut x = vec![0i32; (out_len + klen) as usize];
            let mut k = vec![0i32; klen as usize];
            let mut y = vec![0i32; out_len as usize];
            let mut driver = fresh_driver();
            let report = bench::run_conv(
                &mut driver,
                &mut clk,
                out_len,
                klen,
                shift,
                &mut x,
                &mut k,
                &mut y,
                Some(1_000_000),
            )
            .expect("valid descriptor");
            assert!(
                report.matched(),
                "conv out_len={} klen={} shift={}",
                out_len,
                klen,
                shift
            );
        }
    }
}
