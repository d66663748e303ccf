//! jsondoc CLI.
//!
//! Checks and pretty-prints JSON documents from a file or stdin.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jsondoc")]
#[command(about = "JSON document checker and formatter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report whether it is valid
    Check {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Parse a document and pretty-print it to stdout
    Format {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (file, format) = match &cli.command {
        Commands::Check { file } => (file.as_ref(), false),
        Commands::Format { file } => (file.as_ref(), true),
    };

    let text = match read_input(file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match jsondoc::parse(&text) {
        Ok(value) => {
            if format {
                println!("{}", jsondoc::write(&value));
            } else {
                println!("ok");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
