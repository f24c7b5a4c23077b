use ctab::{DEFAULT_NAME, default_output_path, dump_file};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

/// Generate a C-style array for a binary file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input binary file.
    input: PathBuf,

    /// Path to the output C source file [default: <INPUT>.c]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Identifier of the generated array.
    #[arg(short, long, default_value = DEFAULT_NAME)]
    name: String,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

pub fn main() -> ExitCode {
    run(&Args::parse())
}

fn run(args: &Args) -> ExitCode {
    let output = args.output_path();

    match dump_file(&args.input, &output, &args.name) {
        Ok(len) => {
            println!("{} bytes -> {}", len, output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ctab: {e}");
            ExitCode::FAILURE
        }
    }
}
