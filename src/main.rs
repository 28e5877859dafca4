use std::{fs, process::ExitCode, time::Instant};

use clap::Parser;
use pylite::{
    Config, Error,
    config::DEFAULT_MAX_CALL_DEPTH,
    interpreter::{evaluator::core::Interpreter, parser::core::parse_program, tokenizer::tokenize},
    on_program_stack,
};

/// pylite runs programs written in a small, indentation-sensitive,
/// Python-like scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pylite to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints how long tokenizing + parsing and running took to stderr.
    #[arg(long)]
    timing: bool,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    contents: String,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let config = Config::default().with_max_call_depth(args.max_call_depth);
    let timing = args.timing;

    match on_program_stack(|| execute(&script, config, timing)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Tokenizes, parses and runs `script`, reporting stage durations when
/// `timing` is set.
fn execute(script: &str, config: Config, timing: bool) -> Result<(), Error> {
    let start = Instant::now();
    let program = parse_program(&tokenize(script)?)?;
    let parsed = start.elapsed();

    let start = Instant::now();
    let result = Interpreter::new().with_config(config).run(&program);
    let ran = start.elapsed();

    if timing {
        eprintln!("tokenize + parse: {parsed:?}");
        eprintln!("interpret: {ran:?}");
    }

    result.map_err(Error::from)
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, if it is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
