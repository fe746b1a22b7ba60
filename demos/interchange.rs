//! Moving decimals between representations through their parts.
//!
//! Run with: cargo run --example interchange

use decimal_parts::{CodecOptions, DecimalString, Decomposer, Form};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = ["-3.14", "1000", "0.0000000001", "12345678901234567890123456789012345678"];

    // One scratch buffer serves every decomposition
    let mut scratch = Vec::with_capacity(38);
    for input in inputs {
        let source: DecimalString = input.parse()?;
        let parts = source.decompose(scratch);
        println!(
            "{:>40} -> form={} negative={} coefficient={:02x?} exponent={}",
            input, parts.form, parts.negative, parts.coefficient, parts.exponent
        );

        let mut target = DecimalString::default();
        target.compose_parts(&parts)?;
        assert_eq!(target, source);
        scratch = parts.into_coefficient();
    }
    println!("✓ Round-trip successful");

    // Malformed text is reported as NaN, which text cannot hold
    let parts = DecimalString::new("1e10").decompose(Vec::new());
    assert_eq!(parts.form, Form::NaN);
    let mut target = DecimalString::default();
    if let Err(err) = target.compose_parts(&parts) {
        println!("1e10 -> {}", err);
    }

    // Limits reject oversized text before building it
    let options = CodecOptions::new().with_max_scale(38);
    let tiny = DecimalString::new("0.0000000000000000000000000000000000000001").decompose(Vec::new());
    if let Err(err) = target.compose_with_options(&tiny, &options) {
        println!("scale 40 -> {}", err);
    }

    Ok(())
}
