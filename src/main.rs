//! lambdas demonstration binary.

use clap::Parser;
use std::io::{self, BufWriter};

use lambdas::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    cli::run(&args, &mut out)?;

    Ok(())
}
