use crate::ast::{AddExpression, Expression, SubtractExpression};
use crate::literal::Literal;

use super::{EvalError, Evaluator};

/// Evaluation delegated to each node type.
pub trait Evaluate {
    fn evaluate(&self) -> Result<Literal, EvalError>;
}

/// Operator node that reduces both children and hands the resulting literals
/// to its own `compute` rule.
pub trait BinaryOperatorExpression {
    fn left(&self) -> &Expression;
    fn right(&self) -> &Expression;
    fn compute(&self, v1: Literal, v2: Literal) -> Result<Literal, EvalError>;

    fn evaluate_operands(&self) -> Result<Literal, EvalError> {
        let v1 = self.left().evaluate()?;
        let v2 = self.right().evaluate()?;
        self.compute(v1, v2)
    }
}

impl Evaluate for Literal {
    fn evaluate(&self) -> Result<Literal, EvalError> {
        Ok(self.clone())
    }
}

impl BinaryOperatorExpression for AddExpression {
    fn left(&self) -> &Expression {
        &self.left
    }

    fn right(&self) -> &Expression {
        &self.right
    }

    fn compute(&self, v1: Literal, v2: Literal) -> Result<Literal, EvalError> {
        match (v1, v2) {
            (Literal::Int(lhs), Literal::Int(rhs)) => Ok(Literal::Int(lhs.wrapping_add(rhs))),
            (v1, v2) => Ok(Literal::String(v1.as_text() + &v2.as_text())),
        }
    }
}

impl Evaluate for AddExpression {
    fn evaluate(&self) -> Result<Literal, EvalError> {
        self.evaluate_operands()
    }
}

impl BinaryOperatorExpression for SubtractExpression {
    fn left(&self) -> &Expression {
        &self.left
    }

    fn right(&self) -> &Expression {
        &self.right
    }

    fn compute(&self, v1: Literal, v2: Literal) -> Result<Literal, EvalError> {
        match (&v1, &v2) {
            (Literal::Int(lhs), Literal::Int(rhs)) => Ok(Literal::Int(lhs.wrapping_sub(*rhs))),
            _ => Err(EvalError::invalid_subtraction(&v1, &v2)),
        }
    }
}

impl Evaluate for SubtractExpression {
    fn evaluate(&self) -> Result<Literal, EvalError> {
        self.evaluate_operands()
    }
}

impl Expression {
    /// The node behind this variant, viewed through its evaluation capability.
    pub fn as_evaluate(&self) -> &dyn Evaluate {
        match self {
            Expression::Literal(literal) => literal,
            Expression::Add(add) => add,
            Expression::Subtract(subtract) => subtract,
        }
    }
}

impl Evaluate for Expression {
    fn evaluate(&self) -> Result<Literal, EvalError> {
        self.as_evaluate().evaluate()
    }
}

/// Registry entry for [`Evaluate::evaluate`].
pub struct Delegated;

impl Delegated {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Delegated {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for Delegated {
    fn name(&self) -> &'static str {
        "delegated"
    }

    fn evaluate(&self, expr: &Expression) -> Result<Literal, EvalError> {
        Evaluate::evaluate(expr)
    }
}
