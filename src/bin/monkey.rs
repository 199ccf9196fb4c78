//! The Monkey command line: a REPL when invoked with no file, or a
//! batch evaluator when given a source file.
//!
//! Grounded in the teacher's `bin/why/{main,cli}.rs`: a `clap`-derived `Cli`
//! with a `LogLevel` `ValueEnum` wired to `simple_logger`. The teacher's CLI
//! is single-purpose (compile a file); this one branches on whether a file
//! was given, since spec.md §6 asks for both an interactive REPL and a
//! file-mode entry point.
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};
use log::info;

use monkey_lang::{Environment, Evaluator, Lexer, Parser, SourceLoadError};

/// Struct containing the CLI configuration for Monkey.
#[derive(ClapParser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// A Monkey source file to lex, parse, and evaluate. Omit to start the
    /// interactive REPL instead.
    #[arg(index = 1)]
    file: Option<PathBuf>,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    verbosity: LogLevel,
}

/// Enum for specifying the log level of Monkey.
#[derive(ValueEnum, Clone, Default, Debug)]
enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,
    #[value(alias("1"))]
    Warn,
    #[value(alias("2"))]
    Info,
    #[value(alias("3"))]
    Debug,
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

fn main() -> ExitCode {
    let args = Cli::parse();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    match args.file {
        Some(path) => run_file(&path),
        None => {
            run_repl();
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &PathBuf) -> ExitCode {
    let source = match fs::read_to_string(path).map_err(|err| SourceLoadError {
        path: path.clone(),
        message: err.to_string(),
    }) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!("evaluating {}", path.display());

    let env = Environment::new();
    if let Some(output) = evaluate(&source, &env) {
        println!("{output}");
    }

    ExitCode::SUCCESS
}

fn run_repl() {
    const PROMPT: &str = ">> ";

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    loop {
        print!("{PROMPT}");
        stdout.flush().ok();

        let mut line = String::new();
        let bytes_read = match stdin.lock().read_line(&mut line) {
            Ok(n) => n,
            Err(_) => break,
        };
        if bytes_read == 0 {
            break;
        }

        if let Some(output) = evaluate(&line, &env) {
            println!("{output}");
        }
    }
}

/// Lexes, parses, and evaluates `source`. Returns `None` for an empty
/// program (nothing to print); prints the parser-error banner itself on a
/// parse failure, matching the canonical Monkey REPL's error presentation
/// (spec.md §6).
fn evaluate(source: &str, env: &std::rc::Rc<std::cell::RefCell<Environment>>) -> Option<String> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        print_parse_errors(&parser.errors);
        return None;
    }

    if program.statements.is_empty() {
        return None;
    }

    let result = Evaluator::eval(&program, env);
    Some(result.to_string())
}

fn print_parse_errors(errors: &[String]) {
    println!("{MONKEY_FACE}");
    println!("Woops! We ran into some monkey business here!");
    println!(" parser errors:");
    for error in errors {
        println!("\t{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_prints_the_result_of_a_simple_expression() {
        let env = Environment::new();
        assert_eq!(evaluate("5 + 5", &env), Some("10".to_string()));
    }

    #[test]
    fn evaluate_returns_none_for_blank_input() {
        let env = Environment::new();
        assert_eq!(evaluate("", &env), None);
    }

    #[test]
    fn evaluate_preserves_bindings_across_calls_sharing_an_environment() {
        let env = Environment::new();
        assert_eq!(evaluate("let x = 10;", &env), Some("null".to_string()));
        assert_eq!(evaluate("x * 2", &env), Some("20".to_string()));
    }
}
