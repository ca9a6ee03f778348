//! The read-evaluate loop
//!
//! Interactive sessions get a rustyline prompt with history; file and pipe
//! input fall back to a plain buffered line loop. Either way each line is
//! classified, reduced, and rendered before the next line is read, and the
//! session ends when input runs out or `exit` is evaluated.

use crate::cli::CliArgs;
use rpcalc::Evaluator;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::process::ExitCode;

pub(crate) fn run(args: CliArgs) -> ExitCode {
    let mut eval = Evaluator::new();
    eval.set_debug(args.debug);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("error opening {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdout()),
    };

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(f) => run_stream(&mut eval, BufReader::new(f), &mut out),
            Err(e) => {
                eprintln!("error opening {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None if io::stdin().is_terminal() => run_interactive(&mut eval, &mut out),
        None => run_stream(&mut eval, BufReader::new(io::stdin()), &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate one line and write the rendered stack to the output sink
fn eval_and_print(eval: &mut Evaluator, line: &str, out: &mut dyn Write) -> io::Result<()> {
    let rendered = eval.eval_line(line);
    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    out.flush()
}

/// Interactive loop with a prompt and line history
fn run_interactive(eval: &mut Evaluator, out: &mut dyn Write) -> io::Result<()> {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("readline init failed: {}", e),
            ));
        }
    };

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                eval_and_print(eval, &line, out)?;
                if eval.exit_requested() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }
    Ok(())
}

/// Plain line loop for files and pipes
fn run_stream<R: BufRead>(
    eval: &mut Evaluator,
    reader: R,
    out: &mut dyn Write,
) -> io::Result<()> {
    for line in reader.lines() {
        eval_and_print(eval, &line?, out)?;
        if eval.exit_requested() {
            break;
        }
    }
    Ok(())
}
