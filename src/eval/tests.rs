#[cfg(test)]
mod tests {
    use crate::eval::*;

    fn eval_str(input: &str) -> Result<String, EvalError> {
        let mut eval = Evaluator::new();
        eval.eval(input)
    }

    #[test]
    fn eval_literal() {
        assert_eq!(eval_str("2").unwrap(), "2");
    }

    #[test]
    fn eval_returns_top_only() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.eval("a b").unwrap(), "b");
        assert_eq!(eval.stack().as_slice(), ["a"]);
    }

    #[test]
    fn eval_empty_is_empty_stack() {
        let err = eval_str("").unwrap_err();
        assert!(err.is_empty_stack());
        assert_eq!(err.to_string(), "Empty stack");
    }

    #[test]
    fn eval_operator_underflow_keeps_partial_stack() {
        let mut eval = Evaluator::new();
        let err = eval.eval("x 1 2 + + +").unwrap_err();
        assert_eq!(err, EvalError::EmptyStack);
        assert!(eval.is_empty());

        let err = eval.eval("keep 1 ifelse").unwrap_err();
        assert_eq!(err, EvalError::EmptyStack);
        assert!(eval.is_empty());
    }

    #[test]
    fn eval_error_stops_processing() {
        let mut eval = Evaluator::new();
        let err = eval.eval("1 0 / 5 6").unwrap_err();
        assert_eq!(err, EvalError::DivisionByZero { op: "/".into() });
        // Nothing after the fault was pushed
        assert!(eval.is_empty());
    }

    #[test]
    fn eval_fault_leaves_earlier_values() {
        let mut eval = Evaluator::new();
        eval.eval("a b 1 0 %").unwrap_err();
        assert_eq!(eval.stack().as_slice(), ["a", "b"]);
        eval.reset();
        assert!(eval.is_empty());
    }

    #[test]
    fn eval_reuses_stack_across_calls() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.eval("1 2").unwrap(), "2");
        assert_eq!(eval.eval("3 +").unwrap(), "4");
        assert!(eval.is_empty());
    }

    #[test]
    fn eval_strict_rejects_non_numbers() {
        let mut eval = Evaluator::new().with_number_policy(NumberPolicy::Strict);
        let err = eval.eval("a 1 +").unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidNumber {
                op: "+".into(),
                value: "a".into()
            }
        );
        // Strings still work
        eval.reset();
        assert_eq!(eval.eval("a b strcat").unwrap(), "ab");
    }

    #[test]
    fn eval_lenient_coerces_non_numbers() {
        assert_eq!(eval_str("a 1 +").unwrap(), "1");
        assert_eq!(eval_str("3 b *").unwrap(), "0");
    }

    #[test]
    fn eval_custom_operator() {
        let mut eval = Evaluator::new();
        eval.register_fn("neg", |stack| {
            let n = stack.pop_int("neg", NumberPolicy::Lenient)?;
            stack.push_int(-n);
            Ok(())
        });
        assert_eq!(eval.eval("5 neg 2 +").unwrap(), "-3");
    }

    #[test]
    fn eval_custom_error_propagates() {
        let mut eval = Evaluator::new();
        eval.register_fn("fail", |_| Err(EvalError::custom("nope")));
        let err = eval.eval("1 fail 2").unwrap_err();
        assert_eq!(err.to_string(), "nope");
        assert_eq!(eval.stack().as_slice(), ["1"]);
    }

    #[test]
    fn eval_overwrite_builtin() {
        let mut eval = Evaluator::new();
        eval.register("+", Builtin::StrCat);
        assert_eq!(eval.eval("2 2 +").unwrap(), "22");
    }

    #[test]
    fn eval_empty_registry_pushes_everything() {
        let mut eval = Evaluator::with_registry(Registry::empty());
        assert_eq!(eval.eval("2 2 +").unwrap(), "+");
        assert_eq!(eval.len(), 2);
    }

    #[test]
    fn evaluate_with_separate_parts() {
        let mut stack = Stack::new();
        let registry = Registry::new();
        let result = evaluate(&mut stack, &registry, NumberPolicy::Lenient, "4 2 *").unwrap();
        assert_eq!(result, "8");
        assert!(stack.is_empty());
    }
}
