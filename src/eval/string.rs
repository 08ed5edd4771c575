use super::{EvalError, Stack};

/// Characters `hostbase` strips from the front of a host name
fn is_host_prefix(c: char) -> bool {
    c.is_ascii_lowercase() || c == ' ' || c == '-'
}

impl Stack {
    /// Concatenate in push order
    /// Usage: str cat strcat -> strcat
    pub(crate) fn op_strcat(&mut self) -> Result<(), EvalError> {
        let x = self.pop()?;
        let mut y = self.pop()?;
        y.push_str(&x);
        self.push(y);
        Ok(())
    }

    /// Strip the leading run of lowercase letters, spaces and hyphens
    /// Usage: sb43 hostbase -> 43
    pub(crate) fn op_hostbase(&mut self) -> Result<(), EvalError> {
        let host = self.pop()?;
        self.push(host.trim_start_matches(is_host_prefix));
        Ok(())
    }
}
