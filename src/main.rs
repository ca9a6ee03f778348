//! rpcalc - a stack-based reverse polish notation calculator
//!
//! Usage:
//!   rpcalc              Start the interactive calculator
//!   rpcalc -in <file>   Evaluate lines from a file
//!   rpcalc -g           Enable debug tracing

use std::env;
use std::process::ExitCode;

mod cli;
mod repl;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    repl::run(cli)
}
