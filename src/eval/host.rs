use super::{EvalError, Stack};
use std::ffi::OsString;
use std::io;

/// Turn a raw host name lookup into a stack value
fn host_string(lookup: io::Result<OsString>) -> Result<String, EvalError> {
    let name = lookup.map_err(|e| EvalError::Hostname(e.to_string()))?;
    name.into_string()
        .map_err(|raw| EvalError::Hostname(format!("not valid UTF-8: {}", raw.to_string_lossy())))
}

/// Name of the machine we are running on
pub(crate) fn current_hostname() -> Result<String, EvalError> {
    host_string(hostname::get())
}

impl Stack {
    /// Push the current host name
    /// Usage: hostname -> sb43
    pub(crate) fn op_hostname(&mut self) -> Result<(), EvalError> {
        self.push(current_hostname()?);
        Ok(())
    }
}
