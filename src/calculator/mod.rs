use std::fmt::Display;

mod error;
pub use error::{OperationError, ParseError};

mod op;
pub use op::{BinaryOp, UnaryOp};

mod stack;
use stack::Stack;
pub use stack::Underflow;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// An RPN calculator over a stack of `f64`.
///
/// Every operation either applies completely or leaves the stack exactly as
/// it was; callers never observe a partially updated stack.
#[derive(Debug, Default, Clone)]
pub struct StackCalculator {
    stack: Stack,
}

impl StackCalculator {
    pub fn new() -> Self {
        Default::default()
    }

    /// Parses `text` (surrounding whitespace ignored) and pushes it.
    pub fn push_value(&mut self, text: &str) -> Result<(), ParseError> {
        trace!("action: push, text {:?}", text);

        let text = text.trim();

        if text.is_empty() {
            info!("push failed: empty input");

            return Err(ParseError::EmptyInput);
        }

        let v = text.parse::<f64>().map_err(|_| {
            info!("push failed: {:?} is not a number", text);

            ParseError::InvalidNumber(text.to_string())
        })?;

        self.stack.push(v);

        trace!("stack: {:?}", self.stack);

        Ok(())
    }

    /// Replaces the two topmost values `a` (second from top) and `b` (top)
    /// with `a op b`, returning the result.
    pub fn binary_operation(&mut self, op: BinaryOp) -> Result<f64, OperationError> {
        self.binary(op, Ok(op))
    }

    /// Like [`binary_operation`](Self::binary_operation), with the operator
    /// given by its tag (`"+"`, `"sub"`, ...).
    ///
    /// Operand checks come first, so an unrecognised tag on a short stack
    /// reports the missing operands.
    pub fn binary_operation_by_tag(&mut self, tag: &str) -> Result<f64, OperationError> {
        self.binary(tag, tag.parse())
    }

    /// Replaces the topmost value with the result of `op`, returning it.
    pub fn unary_scientific_operation(&mut self, op: UnaryOp) -> Result<f64, OperationError> {
        self.unary(op, Ok(op))
    }

    /// Like [`unary_scientific_operation`](Self::unary_scientific_operation),
    /// with the function given by name.
    pub fn unary_scientific_operation_by_tag(
        &mut self,
        tag: &str,
    ) -> Result<f64, OperationError> {
        self.unary(tag, tag.parse())
    }

    /// The engine keeps no pending input, so there is nothing to clear here;
    /// front ends clear their own entry buffer.
    pub fn clear_entry(&mut self) {
        trace!("action: clear entry");
    }

    pub fn clear_all(&mut self) {
        trace!("action: clear all");

        self.stack.clear();
    }

    /// Stack contents from the bottom (oldest) to the top (newest).
    pub fn snapshot(&self) -> Vec<f64> {
        self.stack.iter().copied().collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> Option<f64> {
        self.stack.top().copied()
    }

    fn binary(
        &mut self,
        name: impl Display,
        op: Result<BinaryOp, OperationError>,
    ) -> Result<f64, OperationError> {
        trace!("action: {}", name);

        let res = self.stack.reduce(|[a, b]: [f64; 2]| op?.apply(a, b));

        self.report(name, res)
    }

    fn unary(
        &mut self,
        name: impl Display,
        op: Result<UnaryOp, OperationError>,
    ) -> Result<f64, OperationError> {
        trace!("action: {}", name);

        let res = self.stack.reduce(|[a]: [f64; 1]| op?.apply(a));

        self.report(name, res)
    }

    fn report(
        &self,
        name: impl Display,
        res: Result<f64, OperationError>,
    ) -> Result<f64, OperationError> {
        match &res {
            Ok(v) => {
                debug!("{}: {}", name, v);
                trace!("stack: {:?}", self.stack);
            }
            Err(OperationError::InsufficientOperands(underflow)) => {
                info!("{} failed: stack underflow ({})", name, underflow);
            }
            Err(e) => {
                info!("{} failed: {}", name, e);
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator_with(values: &[&str]) -> StackCalculator {
        let mut calc = StackCalculator::new();
        for v in values {
            calc.push_value(v).unwrap();
        }
        calc
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn push_value_parses_trimmed_text() {
        let mut calc = StackCalculator::new();

        for (text, expected) in [
            ("3", 3.0),
            ("  2.5\n", 2.5),
            ("-4", -4.0),
            (".5", 0.5),
            ("1e3", 1000.0),
        ] {
            let before = calc.depth();
            assert_eq!(calc.push_value(text), Ok(()));
            assert_eq!(calc.depth(), before + 1);
            assert_eq!(calc.top(), Some(expected));
        }
    }

    #[test]
    fn push_value_rejects_empty_and_garbage() {
        let mut calc = calculator_with(&["1"]);

        assert_eq!(calc.push_value(""), Err(ParseError::EmptyInput));
        assert_eq!(calc.push_value(" \t "), Err(ParseError::EmptyInput));
        assert_eq!(
            calc.push_value(" 1.2.3 "),
            Err(ParseError::InvalidNumber("1.2.3".into()))
        );
        assert_eq!(
            calc.push_value("abc"),
            Err(ParseError::InvalidNumber("abc".into()))
        );

        assert_eq!(calc.snapshot(), vec![1.0]);
    }

    #[test]
    fn binary_needs_two_operands() {
        for values in [&[][..], &["7"][..]] {
            for op in BinaryOp::ALL {
                let mut calc = calculator_with(values);
                let before = calc.snapshot();

                let res = calc.binary_operation(op);

                assert!(
                    matches!(res, Err(OperationError::InsufficientOperands(_))),
                    "{} on {:?} gave {:?}",
                    op,
                    values,
                    res
                );
                assert_eq!(calc.snapshot(), before);
            }
        }
    }

    #[test]
    fn binary_pops_b_then_a() {
        let cases = [
            (BinaryOp::Add, 11.0),
            (BinaryOp::Subtract, 5.0),
            (BinaryOp::Multiply, 24.0),
            (BinaryOp::Divide, 8.0 / 3.0),
        ];

        for (op, expected) in cases {
            let mut calc = calculator_with(&["100", "8", "3"]);

            assert_eq!(calc.binary_operation(op), Ok(expected));
            assert_eq!(calc.snapshot(), vec![100.0, expected]);
        }
    }

    #[test]
    fn divide_result_and_depth() {
        let mut calc = calculator_with(&["9", "-12", "4"]);

        assert_eq!(calc.binary_operation(BinaryOp::Divide), Ok(-3.0));
        assert_eq!(calc.depth(), 2);
    }

    #[test]
    fn divide_by_zero_restores_operands() {
        let mut calc = calculator_with(&["1", "5", "0"]);

        assert_eq!(
            calc.binary_operation(BinaryOp::Divide),
            Err(OperationError::DivisionByZero)
        );
        assert_eq!(calc.snapshot(), vec![1.0, 5.0, 0.0]);
    }

    #[test]
    fn unknown_binary_tag_restores_operands() {
        let mut calc = calculator_with(&["2", "3"]);

        assert_eq!(
            calc.binary_operation_by_tag("^"),
            Err(OperationError::UnknownOperator("^".into()))
        );
        assert_eq!(calc.snapshot(), vec![2.0, 3.0]);

        assert_eq!(calc.binary_operation_by_tag("*"), Ok(6.0));
        assert_eq!(calc.snapshot(), vec![6.0]);
    }

    #[test]
    fn short_stack_is_reported_before_unknown_tag() {
        let mut calc = calculator_with(&["2"]);

        assert_eq!(
            calc.binary_operation_by_tag("^"),
            Err(OperationError::InsufficientOperands(Underflow {
                needed: 2,
                available: 1
            }))
        );
        assert_eq!(
            StackCalculator::new().unary_scientific_operation_by_tag("log"),
            Err(OperationError::InsufficientOperands(Underflow {
                needed: 1,
                available: 0
            }))
        );
    }

    #[test]
    fn unary_needs_an_operand() {
        for op in UnaryOp::ALL {
            let mut calc = StackCalculator::new();

            assert!(matches!(
                calc.unary_scientific_operation(op),
                Err(OperationError::InsufficientOperands(_))
            ));
            assert!(calc.is_empty());
        }
    }

    #[test]
    fn sin_of_ninety_degrees() {
        let mut calc = calculator_with(&["90"]);

        assert_close(calc.unary_scientific_operation(UnaryOp::Sin).unwrap(), 1.0);
        assert_eq!(calc.depth(), 1);
    }

    #[test]
    fn trig_replaces_only_the_top() {
        let mut calc = calculator_with(&["5", "60"]);

        let cos = calc.unary_scientific_operation(UnaryOp::Cos).unwrap();
        assert_close(cos, 0.5);

        let snapshot = calc.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], 5.0);
        assert_close(snapshot[1], 0.5);
    }

    #[test]
    fn sqrt_of_negative_restores_operand() {
        let mut calc = calculator_with(&["3", "-4"]);

        assert_eq!(
            calc.unary_scientific_operation(UnaryOp::Sqrt),
            Err(OperationError::InvalidDomain {
                op: UnaryOp::Sqrt,
                operand: -4.0
            })
        );
        assert_eq!(calc.snapshot(), vec![3.0, -4.0]);
    }

    #[test]
    fn sqrt_of_nan_restores_operand() {
        let mut calc = calculator_with(&["1", "NaN"]);

        assert!(matches!(
            calc.unary_scientific_operation(UnaryOp::Sqrt),
            Err(OperationError::InvalidDomain { op: UnaryOp::Sqrt, .. })
        ));

        let snapshot = calc.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], 1.0);
        assert!(snapshot[1].is_nan());
    }

    #[test]
    fn non_finite_entries_are_accepted() {
        let mut calc = calculator_with(&["inf", "-inf"]);

        assert_eq!(calc.snapshot(), vec![f64::INFINITY, f64::NEG_INFINITY]);
        assert!(calc.binary_operation(BinaryOp::Add).unwrap().is_nan());
        assert_eq!(calc.depth(), 1);
    }

    #[test]
    fn sqrt_of_non_negative() {
        let mut calc = calculator_with(&["2.25"]);

        assert_eq!(calc.unary_scientific_operation(UnaryOp::Sqrt), Ok(1.5));
        assert_eq!(calc.snapshot(), vec![1.5]);
    }

    #[test]
    fn unknown_unary_tag_restores_operand() {
        let mut calc = calculator_with(&["8"]);

        assert_eq!(
            calc.unary_scientific_operation_by_tag("ln"),
            Err(OperationError::UnknownOperator("ln".into()))
        );
        assert_eq!(calc.snapshot(), vec![8.0]);
    }

    #[test]
    fn clear_entry_leaves_stack_alone() {
        let mut calc = calculator_with(&["1", "2"]);
        calc.clear_entry();

        assert_eq!(calc.snapshot(), vec![1.0, 2.0]);
    }

    #[test]
    fn clear_all_empties_stack() {
        let mut calc = calculator_with(&["1", "2", "3"]);
        calc.clear_all();

        assert!(calc.is_empty());
        assert!(calc.snapshot().is_empty());

        calc.clear_all();
        assert!(calc.snapshot().is_empty());
    }

    #[test]
    fn snapshot_is_bottom_to_top_and_stable() {
        let calc = calculator_with(&["1", "2", "3"]);

        let first = calc.snapshot();
        let second = calc.snapshot();

        assert_eq!(first, vec![1.0, 2.0, 3.0]);
        assert_eq!(first, second);
    }

    #[test]
    fn chained_session() {
        // (3 + 4) * 2, then sqrt of 196
        let mut calc = calculator_with(&["3", "4"]);

        assert_eq!(calc.binary_operation(BinaryOp::Add), Ok(7.0));
        calc.push_value("2").unwrap();
        assert_eq!(calc.binary_operation(BinaryOp::Multiply), Ok(14.0));
        calc.push_value("14").unwrap();
        assert_eq!(calc.binary_operation(BinaryOp::Multiply), Ok(196.0));
        assert_eq!(calc.unary_scientific_operation(UnaryOp::Sqrt), Ok(14.0));
        assert_eq!(calc.snapshot(), vec![14.0]);
    }
}
