use crate::ast::{AddExpression, Expression, SubtractExpression};
use crate::literal::Literal;

use super::{EvalError, Evaluator};

/// Reduces `expr` to a literal in one function that discriminates on node kind.
///
/// Operands are evaluated left then right, and the operator node's variant (not
/// the operand types) selects the rule. Integer arithmetic wraps on overflow.
pub fn evaluate_static(expr: &Expression) -> Result<Literal, EvalError> {
    match expr {
        Expression::Literal(literal) => Ok(literal.clone()),
        Expression::Add(AddExpression { left, right }) => {
            let left = evaluate_static(left)?;
            let right = evaluate_static(right)?;
            match (&left, &right) {
                (Literal::Int(lhs), Literal::Int(rhs)) => Ok(Literal::Int(lhs.wrapping_add(*rhs))),
                _ => Ok(Literal::String(left.as_text() + &right.as_text())),
            }
        }
        Expression::Subtract(SubtractExpression { left, right }) => {
            let left = evaluate_static(left)?;
            let right = evaluate_static(right)?;
            match (&left, &right) {
                (Literal::Int(lhs), Literal::Int(rhs)) => Ok(Literal::Int(lhs.wrapping_sub(*rhs))),
                _ => Err(EvalError::invalid_subtraction(&left, &right)),
            }
        }
    }
}

/// Registry entry for [`evaluate_static`].
pub struct Centralized;

impl Centralized {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Centralized {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for Centralized {
    fn name(&self) -> &'static str {
        "centralized"
    }

    fn evaluate(&self, expr: &Expression) -> Result<Literal, EvalError> {
        evaluate_static(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_literals_unchanged() {
        let literal = Literal::string("Hello");
        assert_eq!(
            evaluate_static(&Expression::from(literal.clone())),
            Ok(literal)
        );
        assert_eq!(
            evaluate_static(&Expression::int(-3)),
            Ok(Literal::int(-3))
        );
    }

    #[test]
    fn adds_integers() {
        let expr = Expression::add(Expression::int(10), Expression::int(20));
        assert_eq!(evaluate_static(&expr), Ok(Literal::int(30)));
    }

    #[test]
    fn concatenates_when_either_side_is_a_string() {
        let strings = Expression::add(Expression::string("Hello"), Expression::string(" world"));
        assert_eq!(evaluate_static(&strings), Ok(Literal::string("Hello world")));

        let int_first = Expression::add(Expression::int(10), Expression::string(" = 30?"));
        assert_eq!(evaluate_static(&int_first), Ok(Literal::string("10 = 30?")));

        let string_first = Expression::add(Expression::string("n="), Expression::int(-4));
        assert_eq!(evaluate_static(&string_first), Ok(Literal::string("n=-4")));
    }

    #[test]
    fn subtracts_nested_integers() {
        let sum = Expression::add(Expression::int(10), Expression::int(20));
        let expr = Expression::subtract(sum, Expression::int(5));
        assert_eq!(evaluate_static(&expr), Ok(Literal::int(25)));
    }

    #[test]
    fn rejects_subtraction_with_any_string_operand() {
        let cases = [
            (Expression::string("Hello"), Expression::string("world")),
            (Expression::int(1), Expression::string("world")),
            (Expression::string("Hello"), Expression::int(1)),
        ];
        for (left, right) in cases {
            let result = evaluate_static(&Expression::subtract(left, right));
            assert!(
                matches!(result, Err(EvalError::InvalidOperation { .. })),
                "expected InvalidOperation, got {result:?}"
            );
        }
    }

    #[test]
    fn failure_inside_subtree_propagates() {
        let bad = Expression::subtract(Expression::string("a"), Expression::string("b"));
        let expr = Expression::add(Expression::int(1), bad);
        assert_eq!(
            evaluate_static(&expr),
            Err(EvalError::InvalidOperation {
                operation: "subtract".to_string(),
                left: "str".to_string(),
                right: "str".to_string(),
            })
        );
    }

    #[test]
    fn wraps_on_overflow() {
        let expr = Expression::add(Expression::int(i64::MAX), Expression::int(1));
        assert_eq!(evaluate_static(&expr), Ok(Literal::int(i64::MIN)));
    }
}
