use crate::literal::Literal;

/// Expression tree over a closed grammar: literals plus two binary operators.
///
/// Operator nodes own their children through `Box`, so a tree can neither
/// share subtrees nor contain cycles.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    Literal(Literal),
    Add(AddExpression),
    Subtract(SubtractExpression),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AddExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SubtractExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl AddExpression {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl SubtractExpression {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Literal(Literal::Int(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(AddExpression::new(left, right))
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Expression::Subtract(SubtractExpression::new(left, right))
    }

    /// Number of nodes in the tree, literals included.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Add(AddExpression { left, right })
            | Expression::Subtract(SubtractExpression { left, right }) => {
                1 + left.node_count() + right.node_count()
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Add(AddExpression { left, right })
            | Expression::Subtract(SubtractExpression { left, right }) => {
                1 + left.depth().max(right.depth())
            }
        }
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

impl From<AddExpression> for Expression {
    fn from(expression: AddExpression) -> Self {
        Expression::Add(expression)
    }
}

impl From<SubtractExpression> for Expression {
    fn from(expression: SubtractExpression) -> Self {
        Expression::Subtract(expression)
    }
}
