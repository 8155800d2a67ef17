pub mod ast;
pub mod evaluator;
pub mod fixtures;
pub mod literal;

#[cfg(test)]
mod harness;

pub use ast::{AddExpression, Expression, SubtractExpression};
pub use evaluator::{EvalError, Evaluate, Evaluator, evaluate_static};
pub use literal::Literal;
