use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use reckon::{Options, error::EvalError, evaluate_with, interpreter::lexer::Lexer, parse_with};
use tracing_subscriber::{EnvFilter, fmt};

/// reckon evaluates arithmetic expressions: integers, `+ - * /`, parentheses
/// and unary signs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every non-blank line of this file instead of an expression.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Print the parsed tree, fully parenthesized, before the result.
    #[arg(long)]
    ast: bool,

    /// Print the token stream before the result.
    #[arg(long)]
    tokens: bool,

    /// How deeply parentheses and unary signs may nest.
    #[arg(long, default_value_t = Options::default().max_depth)]
    max_depth: usize,

    /// Expression to evaluate. Starts an interactive prompt when omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    const fn options(&self) -> Options {
        Options { max_depth: self.max_depth }
    }

    /// Evaluates one line, printing any requested debugging output first.
    fn run(&self, source: &str) -> Result<String, EvalError> {
        if self.tokens {
            for token in Lexer::new(source) {
                println!("{:?}", token?);
            }
        }
        if self.ast {
            println!("{}", parse_with(source, &self.options())?);
        }
        evaluate_with(source, &self.options()).map(|n| n.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RECKON_LOG takes precedence over RUST_LOG; default to warnings only.
    let filter = EnvFilter::try_from_env("RECKON_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                      .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    if let Some(expression) = &args.expression {
        return match args.run(expression) {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        let mut failed = false;
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            match args.run(line) {
                Ok(result) => println!("{result}"),
                Err(e) => {
                    failed = true;
                    println!("{e}");
                },
            }
        }
        return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    }

    repl(&args)
}

/// Reads one expression per line until end of input, skipping blank lines.
fn repl(args: &Args) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("calc> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                println!();
                return ExitCode::SUCCESS;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        match args.run(&line) {
            Ok(result) => println!("{result}"),
            Err(e) => println!("{e}"),
        }
    }
}
