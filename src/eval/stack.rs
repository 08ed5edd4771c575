use super::EvalError;

/// The value stack shared by every operator of one evaluation
///
/// The last element is the top. Operators only ever touch the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<String>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.items.push(value.into());
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<String, EvalError> {
        self.items.pop().ok_or(EvalError::EmptyStack)
    }

    /// Look at the top value without removing it
    pub fn peek(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every value. Registered operators are unaffected.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Bottom-to-top view of the stack
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    // ========================================
    // Stack shuffling operators
    // ========================================

    /// swap: a b -> b a
    pub(crate) fn op_swap(&mut self) -> Result<(), EvalError> {
        let x = self.pop()?;
        let y = self.pop()?;
        self.push(x);
        self.push(y);
        Ok(())
    }

    /// dup: a -> a a
    pub(crate) fn op_dup(&mut self) -> Result<(), EvalError> {
        let x = self.pop()?;
        self.push(x.clone());
        self.push(x);
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Stack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
