use rpcalc::Registry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
pub(crate) struct CliArgs {
    /// Input file path; `None` reads standard input
    pub(crate) input: Option<String>,
    /// Output file path; `None` writes standard output
    pub(crate) output: Option<String>,
    pub(crate) debug: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        input: None,
        output: None,
        debug: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-in" => {
                if i + 1 < args.len() {
                    i += 1;
                    if args[i] != "stdin" {
                        cli.input = Some(args[i].clone());
                    }
                }
            }
            "-out" => {
                if i + 1 < args.len() {
                    i += 1;
                    if args[i] != "stdout" {
                        cli.output = Some(args[i].clone());
                    }
                }
            }
            "-g" => {
                cli.debug = true;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's an input file if not a flag
                if !path.starts_with('-') {
                    cli.input = Some(path.to_string());
                } else {
                    eprintln!("unknown flag: {}", path);
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"rpcalc-{} A stack-based reverse polish notation calculator

USAGE:
    rpcalc                  Start the interactive calculator
    rpcalc -in <file>       Read input lines from a file (stdin by default)
    rpcalc -out <file>      Write results to a file (stdout by default)
    rpcalc -g               Enable debug tracing
    rpcalc --help           Show this help message
    rpcalc --version        Show version

CORE CONCEPT:
    Operands precede the operator that consumes them.
    3 4 +                   Stack: [ 3 ] -> [ 3, 4 ] -> + pops both
                            Result: [ 7 ]

    The stack, variables, macros, and display mode persist across lines.

VARIABLES AND MACROS:
    1024 x=                 Bind 1024 to x
    x x *                   [ 1048576 ]
    macro sq dup *          Define sq as 'dup *'
    5 sq                    [ 25 ]

{}"#,
        VERSION,
        Registry::new().usage()
    );
}

pub(crate) fn print_version() {
    println!("rpcalc-{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rpcalc")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let cli = parse_args(&args(&[]));
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_stream_flags() {
        let cli = parse_args(&args(&["-in", "session.rpn", "-out", "result.txt", "-g"]));
        assert_eq!(cli.input.as_deref(), Some("session.rpn"));
        assert_eq!(cli.output.as_deref(), Some("result.txt"));
        assert!(cli.debug);
    }

    #[test]
    fn test_stdin_keyword_means_default() {
        let cli = parse_args(&args(&["-in", "stdin"]));
        assert!(cli.input.is_none());
    }
}
