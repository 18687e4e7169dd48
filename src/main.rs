//! Print the checksum verdict of every frame found in a log file.

use std::fs::File;
use std::io::{self, stdin, stdout, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use heapless as _;
use hexframes::FrameReader;
use log::{error, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Log file to read. Reads standard input if omitted or `-`.
    #[arg(index = 1)]
    file: Option<PathBuf>,
    /// Print frames as hexadecimal bytes instead of decimal numbers.
    #[arg(long)]
    hex: bool,
    /// Only print frames whose checksum does not match.
    #[arg(long)]
    failed_only: bool,
    /// Print a summary to standard error at the end of the input.
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => match File::open(path) {
            Ok(file) => run(&args, BufReader::new(file)),
            Err(error) => {
                error!("Cannot open {}: {error}", path.display());
                return ExitCode::FAILURE;
            }
        },
        _ => run(&args, stdin().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, input: impl BufRead) -> io::Result<()> {
    let mut reader = FrameReader::new(input);
    let mut output = stdout().lock();

    for report in reader.by_ref() {
        let report = report?;

        if args.failed_only && report.is_valid() {
            continue;
        }

        if args.hex {
            writeln!(output, "{report:#}")?;
        } else {
            writeln!(output, "{report}")?;
        }
    }

    output.flush()?;
    info!("{}", reader.summary());

    if args.summary {
        eprintln!("{}", reader.summary());
    }

    Ok(())
}
