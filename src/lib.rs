//! rpnexpr - a minimal postfix expression evaluator
//!
//! # Overview
//!
//! rpnexpr evaluates small configuration expressions written in reverse
//! Polish notation. An expression is split on spaces; every token that names
//! a registered operator runs against the stack, every other token is pushed
//! verbatim as a literal. When the tokens run out, the top of the stack is
//! popped and returned as the result.
//!
//! ```text
//! 2 2 +                 # 4
//! 4 2 -                 # 2  (second-popped minus first-popped)
//! 4095 4096 roundup     # 4096
//! str cat strcat        # strcat
//! hostname hostbase     # numeric suffix of this host's name
//! ```
//!
//! All values are strings. Numeric operators parse their operands as
//! decimal integers and format the result back to text.
//!
//! # Example
//!
//! ```rust
//! use rpnexpr::{EvalError, Evaluator};
//!
//! let mut eval = Evaluator::new();
//! assert_eq!(eval.eval("2 4 swap /").unwrap(), "2");
//!
//! // Embedding callers can add their own primitives.
//! eval.register_fn("double", |stack| {
//!     let s = stack.pop()?;
//!     stack.push(format!("{s}{s}"));
//!     Ok(())
//! });
//! assert_eq!(eval.eval("ab double").unwrap(), "abab");
//!
//! // An empty expression leaves nothing to return.
//! assert!(matches!(eval.eval(""), Err(EvalError::EmptyStack)));
//! ```

pub mod eval;
pub mod lexer;

// Re-export commonly used items
pub use eval::{
    evaluate, Builtin, EvalError, Evaluator, NumberPolicy, Operator, Registry, Stack,
};
pub use lexer::tokenize;

/// Convenience function to evaluate an expression on a fresh evaluator
pub fn eval(input: &str) -> Result<String, EvalError> {
    Evaluator::new().eval(input)
}
