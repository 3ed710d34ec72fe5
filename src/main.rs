use std::{fs,
          io::{self, BufRead},
          path::PathBuf,
          process::ExitCode};

use clap::Parser;
use miniml::{interpret, suite::run_suite};

/// miniml is a tree-walking interpreter for a small eager ML subset.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the embedded language test suite and exits with the number of
    /// failed cases.
    #[arg(long)]
    test: bool,

    /// Source file to interpret. Without one, programs are read line by
    /// line from standard input.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.test {
        return match run_suite(&mut io::stdout()) {
            Ok(report) => ExitCode::from(u8::try_from(report.failed()).unwrap_or(u8::MAX)),
            Err(e) => {
                eprintln!("Failed to write the suite report: {e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Some(file) = args.file {
        let source = match fs::read_to_string(&file) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          file.display());
                return ExitCode::FAILURE;
            },
        };
        return match interpret(&source) {
            Ok(value) => {
                println!("Out: {}", value.to_string_typed());
                ExitCode::SUCCESS
            },
            Err(fault) => {
                eprintln!("{fault}");
                ExitCode::FAILURE
            },
        };
    }

    repl()
}

/// Reads programs from standard input, one per line, until end of input.
/// A fault ends the current line, never the loop.
fn repl() -> ExitCode {
    println!("miniml input, one program per line:");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        match interpret(&line) {
            Ok(value) => println!("Out: {}", value.to_string_typed()),
            Err(fault) => eprintln!("{fault}"),
        }
    }
    ExitCode::SUCCESS
}
