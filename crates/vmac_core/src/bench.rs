//! Benchmark orchestration.
//!
//! One call runs one benchmark end to end: generate operands, time the CPU
//! reference path, push the operands through the transport binding, walk
//! the register protocol, and fold both results into a report. The caller
//! supplies the operand buffers, sized for the run; nothing here persists
//! between invocations. Mismatched results are recorded, never asserted.
//!
//! `max_polls` carries the binding's completion-wait policy: `None` for the
//! bare-metal polled binding (spin forever), a bound for the simulated bus
//! so automated runs cannot hang. An exhausted bound marks the report as
//! timed out and the run proceeds with whatever the device last exposed.

use crate::MacError;
use crate::clock::CycleSource;
use crate::descriptor::BenchDescriptor;
use crate::driver::AccelDriver;
use crate::kernel;
use crate::pattern;
use crate::report::{ConvReport, DotReport};
use crate::transport::Transport;

/// Runs one dot-product benchmark.
///
/// `a` and `b` must hold at least `n` elements each; only the first `n`
/// are generated and used.
pub fn run_dot<T: Transport, C: CycleSource>(
    driver: &mut AccelDriver<T>,
    clock: &mut C,
    n: u32,
    shift: u32,
    a: &mut [i32],
    b: &mut [i32],
    max_polls: Option<u64>,
) -> Result<DotReport, MacError> {
    let desc = BenchDescriptor::dot(n, shift);
    desc.validate()?;
    if a.len() < n as usize || b.len() < n as usize {
        return Err(MacError::BufferTooSmall);
    }
    let a = &mut a[..n as usize];
    let b = &mut b[..n as usize];

    pattern::ramp_a(a);
    pattern::ramp_b(b);

    let t0 = clock.now();
    let cpu_result = kernel::dot(a, b, shift);
    let t1 = clock.now();
    let cpu_cycles = t1.wrapping_sub(t0);

    driver.load_a(a)?;
    driver.load_b(b)?;
    driver.clear();
    driver.configure(&desc)?;
    driver.start()?;
    let completed = driver.wait_done(max_polls);

    let acc_cycles = driver.read_cycles()?;
    let acc_result = driver.read_output(0)? as i32;

    Ok(DotReport {
        n,
        rshift: shift,
        cpu_cycles,
        acc_cycles,
        cpu_result,
        acc_result,
        timed_out: !completed,
    })
}

/// Runs one 1-D convolution benchmark.
///
/// `x` must hold the sliding-window sequence (`out_len + klen` samples),
/// `k` the kernel (`klen` samples) and `y` the CPU-side outputs
/// (`out_len` entries). The accelerator's full output vector is compared
/// against `y`; the report keeps the first two outputs of each path plus
/// the mismatch count.
pub fn run_conv<T: Transport, C: CycleSource>(
    driver: &mut AccelDriver<T>,
    clock: &mut C,
    out_len: u32,
    klen: u32,
    shift: u32,
    x: &mut [i32],
    k: &mut [i32],
    y: &mut [i32],
    max_polls: Option<u64>,
) -> Result<ConvReport, MacError> {
    let desc = BenchDescriptor::conv(out_len, klen, shift);
    desc.validate()?;
    let window = desc.window_len() as usize;
    if x.len() < window || k.len() < klen as usize || y.len() < out_len as usize {
        return Err(MacError::BufferTooSmall);
    }
    let x = &mut x[..window];
    let k = &mut k[..klen as usize];
    let y = &mut y[..out_len as usize];

    pattern::ramp_a(x);
    pattern::ramp_b(k);

    let t0 = clock.now();
    kernel::conv1d(x, k, y, shift);
    let t1 = clock.now();
    let cpu_cycles = t1.wrapping_sub(t0);

    driver.load_a(x)?;
    driver.load_b(k)?;
    driver.clear();
    driver.configure(&desc)?;
    driver.start()?;
    let completed = driver.wait_done(max_polls);

    let acc_cycles = driver.read_cycles()?;

    let mut mismatches: u32 = 0;
    let mut y0_acc: i32 = 0;
    let mut y1_acc: i32 = 0;
    for (o, &expect) in y.iter().enumerate() {
        let got = driver.read_output(o as u32)? as i32;
        if o == 0 {
            y0_acc = got;
        } else if o == 1 {
            y1_acc = got;
        }
        if got != expect {
            mismatches += 1;
        }
    }

    Ok(ConvReport {
        out_len,
        klen,
        rshift: shift,
        cpu_cycles,
        acc_cycles,
        y0_cpu: y[0],
        y1_cpu: if y.len() > 1 { y[1] } else { 0 },
        y0_acc,
        y1_acc,
        mismatches,
        timed_out: !completed,
    })
}
