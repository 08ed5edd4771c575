//! Evaluator for rpnexpr - tokenize, dispatch, pop the result
//!
//! Each token is looked up in the [`Registry`]:
//! - A registered name runs its operator, which pops and pushes on the [`Stack`]
//! - Anything else is a literal and is pushed verbatim
//!
//! After the last token the top of the stack is popped and returned.
//!
//! # Errors
//!
//! The first error raised by an operator, or by the final pop, aborts the
//! expression. The stack is left exactly as it was at that point; callers
//! that reuse a stack reset it themselves.

mod helpers;
mod host;
mod math;
mod registry;
mod stack;
mod string;
mod tests;

pub use registry::{Builtin, CustomOp, Operator, Registry};
pub use stack::Stack;

use crate::lexer::tokenize;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Empty stack")]
    EmptyStack,
    #[error("{op}: division by zero")]
    DivisionByZero { op: String },
    #[error("{op}: invalid number '{value}'")]
    InvalidNumber { op: String, value: String },
    #[error("No hostname: {0}")]
    Hostname(String),
    /// Raised by caller-registered operators
    #[error("{0}")]
    Custom(String),
}

impl EvalError {
    pub fn custom(msg: impl Into<String>) -> Self {
        EvalError::Custom(msg.into())
    }

    /// The expected, recoverable outcome of popping with nothing pushed
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, EvalError::EmptyStack)
    }
}

/// How numeric operators treat an operand that is not a decimal integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberPolicy {
    /// Read it as 0, matching long-standing expression behavior
    #[default]
    Lenient,
    /// Fail with [`EvalError::InvalidNumber`]
    Strict,
}

/// Evaluate `expr` against a caller-owned stack and registry
pub fn evaluate(
    stack: &mut Stack,
    registry: &Registry,
    policy: NumberPolicy,
    expr: &str,
) -> Result<String, EvalError> {
    for token in tokenize(expr) {
        match registry.get(token) {
            Some(op) => {
                trace!(token, depth = stack.len(), "operator");
                op.apply(stack, policy)?;
            }
            None => {
                trace!(token, depth = stack.len(), "literal");
                stack.push(token);
            }
        }
    }
    let result = stack.pop()?;
    debug!(expr, result = result.as_str(), remaining = stack.len(), "evaluated");
    Ok(result)
}

/// The evaluator owns a stack and the operators that may act on it
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    /// The value stack
    pub(crate) stack: Stack,
    /// Operators available to expressions
    pub(crate) registry: Registry,
    /// Parsing rule for numeric operands
    pub(crate) policy: NumberPolicy,
}

impl Evaluator {
    /// Empty stack, built-in operators, lenient numbers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Registry) -> Self {
        Evaluator {
            stack: Stack::new(),
            registry,
            policy: NumberPolicy::default(),
        }
    }

    pub fn with_number_policy(mut self, policy: NumberPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Evaluate one expression and return its top of stack
    pub fn eval(&mut self, expr: &str) -> Result<String, EvalError> {
        evaluate(&mut self.stack, &self.registry, self.policy, expr)
    }

    pub fn register(&mut self, name: impl Into<String>, op: impl Into<Operator>) {
        self.registry.register(name, op);
    }

    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Stack) -> Result<(), EvalError> + 'static,
    {
        self.registry.register_fn(name, f);
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn number_policy(&self) -> NumberPolicy {
        self.policy
    }

    /// Clear the stack; operators stay registered
    pub fn reset(&mut self) {
        self.stack.reset();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
