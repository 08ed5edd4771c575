//! Common test utilities for rpnexpr integration tests

#[allow(unused_imports)]
pub use rpnexpr::{EvalError, Evaluator, NumberPolicy, Registry, Stack};

/// Evaluate on a fresh evaluator and return the result
#[allow(dead_code)]
pub fn eval(input: &str) -> Result<String, EvalError> {
    let mut evaluator = Evaluator::new();
    evaluator.eval(input)
}

/// Evaluate, then check the stack came back empty
#[allow(dead_code)]
pub fn eval_clean(evaluator: &mut Evaluator, input: &str) -> Result<String, EvalError> {
    let result = evaluator.eval(input);
    assert!(
        evaluator.is_empty(),
        "{:?}: stack is {:?} and should be empty",
        input,
        evaluator.stack().as_slice()
    );
    result
}
