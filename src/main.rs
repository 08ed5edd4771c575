//! rpnexpr - evaluate postfix configuration expressions
//!
//! Usage:
//!   rpnexpr              Start interactive REPL
//!   rpnexpr -c "expr"    Evaluate a single expression
//!   rpnexpr file.rpn     Evaluate every line of a file

mod cli;
mod repl;

use cli::{evaluate_command, evaluate_file, parse_args, print_help, print_operators, print_version};
use std::env;
use std::process::ExitCode;

/// Install a log subscriber when `RUST_LOG` is set or `--trace` was given
fn init_tracing(trace: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if trace {
        EnvFilter::new("rpnexpr=trace")
    } else if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.trace);
    let policy = cli.number_policy();

    if cli.list {
        print_operators();
        return ExitCode::SUCCESS;
    }

    if let Some(expr) = cli.command {
        return evaluate_command(&expr, policy);
    }

    if let Some(path) = cli.script {
        return evaluate_file(&path, policy);
    }

    match repl::run_repl(policy) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
