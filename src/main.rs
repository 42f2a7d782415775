use std::{fs, process::ExitCode, sync::Once};

use clap::Parser;
use reckon::{interpreter::evaluator::Evaluator, util::num::format_number};

/// reckon evaluates arithmetic expressions and prints one result per
/// expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expressions from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Only print the result of the last expression.
    #[arg(short, long)]
    quiet: bool,

    /// The expressions to evaluate, or a path when `--file` is given.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

static TRACING_INIT: Once = Once::new();

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=reckon=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                            .with_target(true)
                                                            .with_level(true))
                                          .with(EnvFilter::from_default_env())
                                          .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut last = None;
    for result in Evaluator::new(&source) {
        match result {
            Ok(value) if args.quiet => last = Some(value),
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    if let Some(value) = last {
        println!("{}", format_number(value));
    }

    ExitCode::SUCCESS
}
