use super::{EvalError, NumberPolicy, Stack};

/// Pop `x` then `y` as integers, the order every binary operator uses
fn pop_pair(stack: &mut Stack, op: &str, policy: NumberPolicy) -> Result<(i64, i64), EvalError> {
    let x = stack.pop_int(op, policy)?;
    let y = stack.pop_int(op, policy)?;
    Ok((x, y))
}

fn nonzero(op: &str, divisor: i64) -> Result<i64, EvalError> {
    if divisor == 0 {
        return Err(EvalError::DivisionByZero { op: op.to_string() });
    }
    Ok(divisor)
}

impl Stack {
    // ========================================
    // Arithmetic primitives
    // ========================================
    // Integers are 64-bit and wrap on overflow.

    /// Usage: 2 2 + -> 4
    pub(crate) fn op_add(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let (x, y) = pop_pair(self, "+", policy)?;
        self.push_int(y.wrapping_add(x));
        Ok(())
    }

    /// Usage: 4 2 - -> 2
    pub(crate) fn op_sub(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let (x, y) = pop_pair(self, "-", policy)?;
        self.push_int(y.wrapping_sub(x));
        Ok(())
    }

    /// Usage: 4 2 * -> 8
    pub(crate) fn op_mul(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let (x, y) = pop_pair(self, "*", policy)?;
        self.push_int(y.wrapping_mul(x));
        Ok(())
    }

    /// Integer division, truncating toward zero
    /// Usage: 4 2 / -> 2
    pub(crate) fn op_div(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let (x, y) = pop_pair(self, "/", policy)?;
        let x = nonzero("/", x)?;
        self.push_int(y.wrapping_div(x));
        Ok(())
    }

    /// Remainder, with the sign of the dividend
    /// Usage: 5 2 % -> 1
    pub(crate) fn op_rem(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let (x, y) = pop_pair(self, "%", policy)?;
        let x = nonzero("%", x)?;
        self.push_int(y.wrapping_rem(x));
        Ok(())
    }

    /// Round a value up to the next multiple of an alignment
    /// Usage: 4097 8192 roundup -> 8192
    pub(crate) fn op_roundup(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let rnd = self.pop_int("roundup", policy)?;
        let v = self.pop_int("roundup", policy)?;
        let rnd = nonzero("roundup", rnd)?;
        let rounded = v
            .wrapping_add(rnd)
            .wrapping_sub(1)
            .wrapping_div(rnd)
            .wrapping_mul(rnd);
        self.push_int(rounded);
        Ok(())
    }

    /// Select one of two values by an integer flag
    /// Usage: else then flag ifelse -> then if flag != 0, else otherwise
    pub(crate) fn op_ifelse(&mut self, policy: NumberPolicy) -> Result<(), EvalError> {
        let flag = self.pop_int("ifelse", policy)?;
        let then = self.pop()?;
        let otherwise = self.pop()?;
        self.push(if flag != 0 { then } else { otherwise });
        Ok(())
    }
}
