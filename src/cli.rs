use rpnexpr::{Evaluator, NumberPolicy, Registry};
use std::env;
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that opts into strict numeric operands
pub(crate) const STRICT_ENV: &str = "RPNEXPR_STRICT";

/// Parsed command-line arguments
#[derive(Debug, Default)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) list: bool,
    pub(crate) trace: bool,
    pub(crate) strict: bool,
}

impl CliArgs {
    /// `--strict` wins; otherwise `RPNEXPR_STRICT` decides
    pub(crate) fn number_policy(&self) -> NumberPolicy {
        if self.strict || env_flag(env::var(STRICT_ENV).ok().as_deref()) {
            NumberPolicy::Strict
        } else {
            NumberPolicy::Lenient
        }
    }
}

fn env_flag(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true") | Some("yes"))
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--strict" => {
                cli.strict = true;
            }
            "--trace" => {
                cli.trace = true;
            }
            "--list" => {
                cli.list = true;
            }
            "-c" => {
                // Everything after -c is the expression
                cli.command = Some(args[i + 1..].join(" "));
                break;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"rpnexpr-{} - postfix configuration expressions

USAGE:
    rpnexpr                 Start interactive REPL
    rpnexpr -c <expr>       Evaluate a single expression
    rpnexpr <file>          Evaluate each line of a file
    rpnexpr --list          List operators
    rpnexpr --help          Show this help message
    rpnexpr --version       Show version

OPTIONS:
    --strict                Reject non-numeric operands instead of reading 0
    --trace                 Log every token to stderr

ENVIRONMENT:
    RPNEXPR_STRICT=1        Same as --strict
    RUST_LOG                Log filter (e.g. rpnexpr=debug)

OPERATORS:
    + - * / %               Integer math: 4 2 - -> 2, 5 2 % -> 1
    swap                    Swap top two: a b -> b a
    dup                     Duplicate top: a -> a a
    ifelse                  Select: else then flag ifelse
    strcat                  Concatenate: str cat strcat -> strcat
    roundup                 Align up: 4097 8192 roundup -> 8192
    hostname                Push this machine's name
    hostbase                Strip name prefix: sb43 hostbase -> 43
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("rpnexpr-{}", VERSION);
}

pub(crate) fn print_operators() {
    for name in Registry::new().names() {
        println!("{}", name);
    }
}

/// Evaluate a single expression and print its result
pub(crate) fn evaluate_command(expr: &str, policy: NumberPolicy) -> ExitCode {
    let mut eval = Evaluator::new().with_number_policy(policy);
    match eval.eval(expr) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate every expression line of a file
///
/// Blank lines and `#` comments are skipped. The stack is reset after each
/// line so one bad expression cannot leak values into the next.
pub(crate) fn evaluate_file(path: &str, policy: NumberPolicy) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut eval = Evaluator::new().with_number_policy(policy);

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let outcome = eval.eval(trimmed);
        eval.reset();

        match outcome {
            Ok(result) => println!("{}", result),
            Err(e) => {
                eprintln!("Error at line {}: {}", line_num + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rpnexpr")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_command_joins_rest() {
        let cli = parse_args(&args(&["--strict", "-c", "2", "2", "+"]));
        assert!(cli.strict);
        assert_eq!(cli.command.as_deref(), Some("2 2 +"));
    }

    #[test]
    fn parse_script_path() {
        let cli = parse_args(&args(&["--trace", "values.rpn"]));
        assert!(cli.trace);
        assert_eq!(cli.script.as_deref(), Some("values.rpn"));
    }

    #[test]
    fn parse_flags() {
        let cli = parse_args(&args(&["-h", "--list", "-V"]));
        assert!(cli.help && cli.list && cli.version);
        assert!(cli.command.is_none());
    }

    #[test]
    fn dash_c_without_expression_is_empty() {
        let cli = parse_args(&args(&["-c"]));
        assert_eq!(cli.command.as_deref(), Some(""));
    }

    #[test]
    fn env_flag_values() {
        assert!(env_flag(Some("1")));
        assert!(env_flag(Some("true")));
        assert!(!env_flag(Some("0")));
        assert!(!env_flag(None));
    }
}
