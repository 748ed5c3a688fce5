use std::{fs, process::ExitCode};

use clap::Parser;
use exprfuse::evaluate;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Expressions evaluated when none are given on the command line.
const SAMPLE_EXPRESSIONS: [&str; 5] = ["2 + 3 * (4 + 5)",
                                       "2 + 3 * 4",
                                       "(2 + 3) * 4",
                                       "2 * (3 + 4) * (5 + 6)",
                                       "1.5 + 2.5 * 3"];

/// exprfuse evaluates arithmetic expressions made of decimal numbers, `+`,
/// `*` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line, in addition to any given
    /// on the command line.
    #[arg(short, long)]
    file: Option<String>,

    /// Removes all whitespace from each expression before evaluating it.
    #[arg(short, long)]
    strip_whitespace: bool,

    /// Shows more in logs, may be provided multiple times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate. With none given and no file, a built-in
    /// list of samples is evaluated.
    expressions: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut expressions = args.expressions;
    if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(contents) => {
                expressions.extend(contents.lines()
                                           .filter(|line| !line.trim().is_empty())
                                           .map(str::to_string));
            },
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let show_case = expressions.is_empty();
    if show_case {
        info!("no expressions given, evaluating samples");
        expressions = SAMPLE_EXPRESSIONS.iter().map(ToString::to_string).collect();
    }

    let mut failures = 0_usize;
    for expression in &expressions {
        if show_case {
            println!("\nTest Case: {expression}");
        }

        let source = if args.strip_whitespace {
            expression.chars().filter(|c| !c.is_whitespace()).collect()
        } else {
            expression.clone()
        };

        match evaluate(&source) {
            Ok(value) => println!("Result: {value:?}"),
            Err(e) => {
                info!(expression = %expression, "evaluation failed");
                println!("Error: {e}");
                failures += 1;
            },
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
