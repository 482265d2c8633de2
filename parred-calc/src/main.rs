//! Command-line interface for the parred-calc demo.
//!
//! Reads arithmetic expressions, one per line, from a file or standard
//! input, evaluates each through the reduction engine, and prints the
//! results. Set `RUST_LOG=trace` to watch the engine's scan decisions.

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use parred_calc::CalcParser;
use std::io::{self, BufRead, BufReader};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates expressions, one per line
    Eval {
        /// Input file; reads standard input when omitted
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { input } => {
            let reader: Box<dyn BufRead> = match input {
                Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
                None => Box::new(io::stdin().lock()),
            };

            let calc = CalcParser::new();
            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match calc.eval(&line) {
                    Ok(value) => println!("{value}"),
                    Err(err) => eprintln!("error: {err}"),
                }
            }
        }
    }

    Ok(())
}
