//! Operator registry: maps names to the operators an expression can call
//!
//! Built-in operators are a closed enum dispatched by `match`. Embedding
//! callers extend the set with closures over the stack.

use super::{EvalError, NumberPolicy, Stack};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Operators every fresh registry starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Swap,
    Dup,
    IfElse,
    StrCat,
    RoundUp,
    Hostname,
    HostBase,
}

impl Builtin {
    pub const ALL: [Builtin; 12] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Rem,
        Builtin::Swap,
        Builtin::Dup,
        Builtin::IfElse,
        Builtin::StrCat,
        Builtin::RoundUp,
        Builtin::Hostname,
        Builtin::HostBase,
    ];

    /// The token that invokes this operator
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Rem => "%",
            Builtin::Swap => "swap",
            Builtin::Dup => "dup",
            Builtin::IfElse => "ifelse",
            Builtin::StrCat => "strcat",
            Builtin::RoundUp => "roundup",
            Builtin::Hostname => "hostname",
            Builtin::HostBase => "hostbase",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn apply(self, stack: &mut Stack, policy: NumberPolicy) -> Result<(), EvalError> {
        match self {
            Builtin::Add => stack.op_add(policy),
            Builtin::Sub => stack.op_sub(policy),
            Builtin::Mul => stack.op_mul(policy),
            Builtin::Div => stack.op_div(policy),
            Builtin::Rem => stack.op_rem(policy),
            Builtin::Swap => stack.op_swap(),
            Builtin::Dup => stack.op_dup(),
            Builtin::IfElse => stack.op_ifelse(policy),
            Builtin::StrCat => stack.op_strcat(),
            Builtin::RoundUp => stack.op_roundup(policy),
            Builtin::Hostname => stack.op_hostname(),
            Builtin::HostBase => stack.op_hostbase(),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature of a caller-supplied operator
pub type CustomOp = dyn Fn(&mut Stack) -> Result<(), EvalError>;

/// Something a token can resolve to
#[derive(Clone)]
pub enum Operator {
    Builtin(Builtin),
    Custom(Rc<CustomOp>),
}

impl Operator {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut Stack) -> Result<(), EvalError> + 'static,
    {
        Operator::Custom(Rc::new(f))
    }

    pub fn apply(&self, stack: &mut Stack, policy: NumberPolicy) -> Result<(), EvalError> {
        match self {
            Operator::Builtin(b) => b.apply(stack, policy),
            Operator::Custom(f) => f(stack),
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Builtin(b) => f.debug_tuple("Builtin").field(b).finish(),
            Operator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Builtin> for Operator {
    fn from(b: Builtin) -> Self {
        Operator::Builtin(b)
    }
}

/// Name-to-operator table
#[derive(Debug, Clone)]
pub struct Registry {
    ops: HashMap<String, Operator>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry holding every built-in operator
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for b in Builtin::ALL {
            registry.register(b.name(), b);
        }
        registry
    }

    /// A registry with no operators; every token is a literal
    pub fn empty() -> Self {
        Registry {
            ops: HashMap::new(),
        }
    }

    /// Add or replace the operator for `name`
    pub fn register(&mut self, name: impl Into<String>, op: impl Into<Operator>) {
        self.ops.insert(name.into(), op.into());
    }

    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Stack) -> Result<(), EvalError> + 'static,
    {
        self.register(name, Operator::custom(f));
    }

    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.ops.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
