//! Betting Ledger Engine CLI
//!
//! Command-line interface for settling a batch of bets from delimited
//! input files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- match_data.txt player_data.txt > results.txt
//! cargo run -- match_data.txt player_data.txt --output results.txt
//! ```
//!
//! The program loads the match data, replays the operation log through the
//! ledger, settles all accepted bets, and writes the report to stdout or
//! to the path given with `--output`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, unwritable output, etc.)

use betting_ledger_engine::cli;
use betting_ledger_engine::pipeline;
use std::fs::File;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Write the report to the requested file, or stdout by default
    let result = match &args.output {
        Some(path) => File::create(path)
            .map_err(|e| format!("Failed to create output file '{}': {}", path.display(), e))
            .and_then(|mut file| pipeline::run(&args.match_file, &args.operation_file, &mut file)),
        None => {
            let mut stdout = std::io::stdout();
            pipeline::run(&args.match_file, &args.operation_file, &mut stdout)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
