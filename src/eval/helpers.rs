use super::{EvalError, NumberPolicy, Stack};
use tracing::warn;

/// Parse a stack value as a decimal integer
///
/// Under [`NumberPolicy::Lenient`] a malformed value reads as 0, which is what
/// existing expressions rely on. [`NumberPolicy::Strict`] reports it instead.
pub(crate) fn parse_int(op: &str, value: &str, policy: NumberPolicy) -> Result<i64, EvalError> {
    match value.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => match policy {
            NumberPolicy::Lenient => {
                warn!(op, value, "non-numeric operand read as 0");
                Ok(0)
            }
            NumberPolicy::Strict => Err(EvalError::InvalidNumber {
                op: op.to_string(),
                value: value.to_string(),
            }),
        },
    }
}

impl Stack {
    /// Pop the top value and parse it as an integer operand of `op`
    pub fn pop_int(&mut self, op: &str, policy: NumberPolicy) -> Result<i64, EvalError> {
        let value = self.pop()?;
        parse_int(op, &value, policy)
    }

    /// Push an integer result
    pub fn push_int(&mut self, n: i64) {
        self.push(n.to_string());
    }
}
