use crate::ast::Expression;
use crate::literal::Literal;

pub mod centralized;
pub mod delegated;
mod error;

pub use centralized::{Centralized, evaluate_static};
pub use delegated::{BinaryOperatorExpression, Delegated, Evaluate};
pub use error::EvalError;

/// Common interface implemented by each evaluation strategy.
///
/// Every strategy must be observably equivalent: for the same tree they either
/// return equal literals or fail with the same error kind.
pub trait Evaluator {
    fn name(&self) -> &'static str;
    fn evaluate(&self, expr: &Expression) -> Result<Literal, EvalError>;
}

pub fn evaluators() -> Vec<Box<dyn Evaluator>> {
    vec![Box::new(Centralized::new()), Box::new(Delegated::new())]
}

pub fn evaluator_by_name(name: &str) -> Option<Box<dyn Evaluator>> {
    evaluators()
        .into_iter()
        .find(|evaluator| evaluator.name() == name)
}
