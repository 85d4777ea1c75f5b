use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use arith_ast::visit::ExpressionPrinter;
use arith_parser::parser::{parse_expression, to_postfix};

#[derive(Debug, Parser)]
#[command(
    name = "arithc",
    version,
    about = "Parser and tree dumper for the Arith expression language",
    long_about = "arithc parses infix arithmetic expressions made of single-character\n\
        tokens (digits, one-letter variables, '+', '-', '*', and parentheses)\n\
        into an expression tree.\n\n\
        EXAMPLES:\n\
        \n  arithc check expr.txt           Parse a file and print the tree dump\n\
        \n  echo '1+2*3' | arithc check     Parse an expression from stdin\n\
        \n  echo '1+2*3' | arithc postfix   Print the postfix (RPN) form\n\
        \n  echo '1+2*3' | arithc json      Print the tree as JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an expression and print its canonical tree dump
    #[command(about = "Parse an expression and print its canonical tree dump")]
    Check(InputArgs),

    /// Convert an expression to postfix (reverse Polish) order
    #[command(about = "Convert an expression to postfix order without building a tree")]
    Postfix(InputArgs),

    /// Parse an expression and print the tree as JSON
    #[command(about = "Parse an expression and print the tree as JSON for tooling")]
    Json(InputArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// Input file holding the expression (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Reads the expression from the given file, or stdin when no file was
/// named. Surrounding whitespace (including the trailing newline of
/// `echo`-style input) is trimmed before parsing.
fn read_source_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    let raw = if let Some(path) = input {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        buf
    };
    Ok(raw.trim().to_string())
}

fn run_check(source: &str) -> i32 {
    match parse_expression(source) {
        Ok(tree) => match ExpressionPrinter::print(&tree) {
            Ok(dumped) => {
                println!("{dumped}");
                0
            }
            Err(e) => {
                eprintln!("error: failed to render tree: {e}");
                2
            }
        },
        Err(e) => {
            eprintln!("parse error: {e}");
            1
        }
    }
}

fn run_postfix(source: &str) -> i32 {
    match to_postfix(source) {
        Ok(postfix) => {
            println!("{postfix}");
            0
        }
        Err(e) => {
            eprintln!("parse error: {e}");
            1
        }
    }
}

fn run_json(source: &str) -> i32 {
    match parse_expression(source) {
        Ok(tree) => match arith_ast::to_json(&tree) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                2
            }
        },
        Err(e) => {
            eprintln!("parse error: {e}");
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A bare invocation behaves like `check` on stdin.
    let cmd = cli.command.unwrap_or(Command::Check(InputArgs { input: None }));

    let args = match &cmd {
        Command::Check(args) | Command::Postfix(args) | Command::Json(args) => args.clone(),
    };
    let source = match read_source_from_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    log::info!("parsing expression {source:?}");

    match cmd {
        Command::Check(_) => run_check(&source),
        Command::Postfix(_) => run_postfix(&source),
        Command::Json(_) => run_json(&source),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_check_with_file() {
        let cli = Cli::try_parse_from(["arithc", "check", "expr.txt"]).unwrap();
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("expr.txt")));
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["arithc", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3, "verbose count should be 3 for -vvv");
        assert!(cli.command.is_none(), "bare invocation defaults to check");
    }

    #[test]
    fn cli_help_lists_subcommands() {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        cmd.write_long_help(&mut buf).unwrap();
        let help = String::from_utf8(buf).unwrap();

        assert!(help.contains("arithc"), "help should mention 'arithc'");
        assert!(help.contains("check"), "help should list check subcommand");
        assert!(
            help.contains("postfix"),
            "help should list postfix subcommand"
        );
        assert!(help.contains("json"), "help should list json subcommand");
        assert!(help.contains("EXAMPLES"), "help should include examples");
    }

    #[test]
    fn check_exit_codes_follow_parse_outcome() {
        assert_eq!(run_check("1+2*3"), 0);
        assert_eq!(run_check("1$2"), 1);
        assert_eq!(run_check(""), 1);
    }

    #[test]
    fn postfix_exit_codes_follow_conversion_outcome() {
        assert_eq!(run_postfix("(1+2)*3"), 0);
        assert_eq!(run_postfix("(1+2"), 1);
    }

    #[test]
    fn json_exit_codes_follow_parse_outcome() {
        assert_eq!(run_json("a*b+c"), 0);
        assert_eq!(run_json("a++b"), 1);
    }
}
