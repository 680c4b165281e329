//! nom parsers for the benchmark report line formats.
//!
//! The grammar is deliberately rigid: the emitting side formats these
//! lines verbatim, so the parser accepts exactly that shape and nothing
//! looser. Field order is fixed.

use crate::record::{BenchKind, BenchRecord};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1};
use nom::combinator::map_res;
use nom::number::complete::double;

/// Parses one `", name=<u64>"` field.
fn field_u64<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, u64> {
    move |input: &'a str| {
        let (input, _) = tag(", ")(input)?;
        let (input, _) = tag(name)(input)?;
        let (input, _) = char('=')(input)?;
        map_res(digit1, str::parse::<u64>)(input)
    }
}

fn dot_head(input: &str) -> IResult<&str, BenchKind> {
    let (input, _) = tag("dot")(input)?;
    let (input, n) = field_u64("n")(input)?;
    Ok((input, BenchKind::Dot { n }))
}

fn conv_head(input: &str) -> IResult<&str, BenchKind> {
    let (input, _) = tag("conv")(input)?;
    let (input, out_len) = field_u64("out_len")(input)?;
    let (input, klen) = field_u64("klen")(input)?;
    Ok((input, BenchKind::Conv { out_len, klen }))
}

/// Parses one BENCH line into a record.
pub fn bench_line(input: &str) -> IResult<&str, BenchRecord> {
    let (input, _) = tag("BENCH, ")(input)?;
    let (input, kind) = alt((dot_head, conv_head))(input)?;
    let (input, rshift) = field_u64("rshift")(input)?;
    let (input, cpu_cycles) = field_u64("cpu_cycles")(input)?;
    let (input, acc_cycles) = field_u64("acc_cycles")(input)?;
    let (input, _) = tag(", speedup=")(input)?;
    let (input, speedup) = double(input)?;
    Ok((
        input,
        BenchRecord {
            kind,
            rshift,
            cpu_cycles,
            acc_cycles,
            speedup,
        },
    ))
}
