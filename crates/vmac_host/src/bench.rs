//! Host benchmarks over the simulated bus-handshake binding.
//!
//! Each run gets a private accelerator model behind a fresh handshake
//! binding; the protocol and the operand banks are singletons per
//! instance, so parallel sweeps never share a device.

use crate::clock::WallClock;
use anyhow::Result;
use rayon::prelude::*;
use vmac_core::bench;
use vmac_core::driver::AccelDriver;
use vmac_hw::{HandshakeBus, VectorMac};

fn fresh_driver() -> AccelDriver<HandshakeBus> {
    AccelDriver::new(HandshakeBus::new(VectorMac::new()))
}

pub fn run_dot(n: u32, shift: u32, max_polls: u64) -> Result<()> {
    let mut driver = fresh_driver();
    let mut clock = WallClock::new();
    let mut a = vec![0i32; n as usize];
    let mut b = vec![0i32; n as usize];

    let report = bench::run_dot(
        &mut driver,
        &mut clock,
        n,
        shift,
        &mut a,
        &mut b,
        Some(max_polls),
    )?;

    if report.timed_out {
        println!("Timeout waiting for dot done");
    }
    println!("{}", report);
    report_bus_timeouts(&mut driver);
    Ok(())
}

pub fn run_conv(out_len: u32, klen: u32, shift: u32, max_polls: u64) -> Result<()> {
    let mut driver = fresh_driver();
    let mut clock = WallClock::new();
    let window = (out_len + klen) as usize;
    let mut x = vec![0i32; window];
    let mut k = vec![0i32; klen as usize];
    let mut y = vec![0i32; out_len as usize];

    let report = bench::run_conv(
        &mut driver,
        &mut clock,
        out_len,
        klen,
        shift,
        &mut x,
        &mut k,
        &mut y,
        Some(max_polls),
    )?;

    if report.timed_out {
        println!("Timeout waiting for conv done");
    }
    println!("{}", report);
    if !report.matched() {
        println!(
            "Mismatched outputs: {}/{}",
            report.mismatches, report.out_len
        );
    }
    report_bus_timeouts(&mut driver);
    Ok(())
}

pub fn run_sweep(min_log2: u32, max_log2: u32, shift: u32) -> Result<()> {
    println!(
        "Sweeping dot sizes 2^{}..=2^{} (shift={})",
        min_log2, max_log2, shift
    );

    let sizes: Vec<u32> = (min_log2..=max_log2).map(|k| 1 << k).collect();

    let reports = sizes
        .par_iter()
        .map(|&n| {
            let mut driver = fresh_driver();
            let mut clock = WallClock::new();
            let mut a = vec![0i32; n as usize];
            let mut b = vec![0i32; n as usize];
            bench::run_dot(
                &mut driver,
                &mut clock,
                n,
                shift,
                &mut a,
                &mut b,
                Some(vmac_hw::handshake::DEFAULT_MAX_WAIT),
            )
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for report in &reports {
        println!("{}", report);
    }
    Ok(())
}

fn report_bus_timeouts(driver: &mut AccelDriver<HandshakeBus>) {
    let timeouts = driver.bus_mut().timeouts();
    if timeouts > 0 {
        println!("Bus acknowledge timeouts: {}", timeouts);
    }
}
