//! Shift every timestamp of an LRC file by a signed millisecond delta.
//!
//! Usage: `lrc-shift <input.lrc> <delta-ms> [output.lrc]`
//!
//! Timestamps are clamped at `[00:00.000]`; when no output path is given the
//! input file is rewritten in place.

use std::{env, fs, process::ExitCode};

use anyhow::{Context, bail};

use verse_hunt_back::lyrics::lrc::adjust_lrc;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (input, delta, output) = match args.as_slice() {
        [input, delta] => (input, delta, input),
        [input, delta, output] => (input, delta, output),
        _ => bail!("usage: lrc-shift <input.lrc> <delta-ms> [output.lrc]"),
    };

    let delta_ms: i64 = delta
        .parse()
        .with_context(|| format!("`{delta}` is not a valid millisecond delta"))?;

    let content = fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let shifted = adjust_lrc(&content, delta_ms);
    fs::write(output, shifted).with_context(|| format!("writing {output}"))?;

    println!("shifted timestamps in {input} by {delta_ms} ms -> {output}");
    Ok(())
}
