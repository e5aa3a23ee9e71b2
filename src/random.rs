//! Random-integer file generation, for producing benchmark test inputs.

use crate::Result;
use crate::textio;
use anyhow::{Context, bail};
use rand::Rng;
use std::path::Path;

/// Parse a `<count>,<min>,<max>` generation spec (tokens may carry
/// surrounding whitespace).
pub fn parse_spec(spec: &str) -> Result<(usize, i64, i64)> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let &[n, min, max] = parts.as_slice() else {
        bail!("spec must be \"<count>,<min>,<max>\", got {:?}", spec);
    };

    let n: usize = n.parse().with_context(|| format!("bad count {:?}", n))?;
    let min: i64 = min
        .parse()
        .with_context(|| format!("bad lower bound {:?}", min))?;
    let max: i64 = max
        .parse()
        .with_context(|| format!("bad upper bound {:?}", max))?;
    if min > max {
        bail!("empty range {}..={}", min, max);
    }

    Ok((n, min, max))
}

/// Sample `n` integers uniformly and independently from `[min, max]`,
/// one per `\n`-terminated line.
pub fn random_ints(n: usize, min: i64, max: i64) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::new();
    for _ in 0..n {
        out.push_str(&rng.gen_range(min..=max).to_string());
        out.push('\n');
    }
    out
}

pub fn write_random_ints(path: impl AsRef<Path>, n: usize, min: i64, max: i64) -> Result<()> {
    textio::write_text(path, &random_ints(n, min, max))
}
