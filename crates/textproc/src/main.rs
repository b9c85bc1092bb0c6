use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use labkit_textproc::cli::{CliArgs, OutputFormat};
use labkit_textproc::{WordCount, top_words};

fn main() -> ExitCode {
    labkit_observability::init_compact();

    // Usage errors exit with status 2 from inside clap.
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let words = top_words(&args.path, args.k)
        .with_context(|| format!("counting words in {}", args.path.display()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_words(&mut out, &words, args.format())?;
    out.flush().context("writing to stdout")?;
    Ok(())
}

fn write_words<W: Write>(out: &mut W, words: &[WordCount], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Lines => {
            for word in words {
                writeln!(out, "{word}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, words)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
