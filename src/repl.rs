use rpnexpr::{Evaluator, NumberPolicy, Stack};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper, Result as RlResult};

const PROMPT: &str = "rpnexpr> ";

/// Tab completion over registered operator names
struct RpnHelper {
    operators: Vec<String>,
}

impl Helper for RpnHelper {}

impl Completer for RpnHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Tokens are space separated, so is the word under the cursor
        let start = line[..pos].rfind(' ').map(|i| i + 1).unwrap_or(0);
        let prefix = &line[start..pos];

        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }

        let pairs = self
            .operators
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();

        Ok((start, pairs))
    }
}

impl Hinter for RpnHelper {
    type Hint = String;
}

impl Highlighter for RpnHelper {}

impl Validator for RpnHelper {}

/// What the REPL should do with one input line
#[derive(Debug, PartialEq)]
enum LineAction<'a> {
    Skip,
    Quit,
    ListOperators,
    Evaluate(&'a str),
}

fn classify(line: &str) -> LineAction<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => LineAction::Skip,
        ".quit" | "exit" => LineAction::Quit,
        ".ops" => LineAction::ListOperators,
        _ if trimmed.starts_with('#') => LineAction::Skip,
        _ => LineAction::Evaluate(line),
    }
}

/// Describe values left below the result, if any
fn leftover_note(stack: &Stack) -> Option<String> {
    if stack.is_empty() {
        return None;
    }
    Some(format!("(left on stack: {})", stack.as_slice().join(" ")))
}

/// Read expressions until EOF, printing each result
pub(crate) fn run_repl(policy: NumberPolicy) -> RlResult<()> {
    let mut eval = Evaluator::new().with_number_policy(policy);

    let mut rl: Editor<RpnHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(RpnHelper {
        operators: eval.registry().names().into_iter().map(String::from).collect(),
    }));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                match classify(&line) {
                    LineAction::Skip => continue,
                    LineAction::Quit => break,
                    LineAction::ListOperators => {
                        println!("{}", eval.registry().names().join(" "));
                    }
                    LineAction::Evaluate(expr) => {
                        match eval.eval(expr) {
                            Ok(result) => {
                                println!("{}", result);
                                if let Some(note) = leftover_note(eval.stack()) {
                                    eprintln!("{}", note);
                                }
                            }
                            Err(e) => eprintln!("Error: {}", e),
                        }
                        eval.reset();
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
