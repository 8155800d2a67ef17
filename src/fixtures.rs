//! Canonical sample trees shared by the harness, benches and the demo binary.

use crate::ast::Expression;
use crate::literal::Literal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Value(Literal),
    InvalidOperation,
}

#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub expression: Expression,
    pub expected: Expected,
}

/// `"Hello" + " world"`
pub fn hello_world() -> Expression {
    Expression::add(Expression::string("Hello"), Expression::string(" world"))
}

/// `10 + 20`
pub fn sum_ten_twenty() -> Expression {
    Expression::add(Expression::int(10), Expression::int(20))
}

/// `(10 + 20) + " = 30?"`
pub fn sum_with_suffix() -> Expression {
    Expression::add(sum_ten_twenty(), Expression::string(" = 30?"))
}

/// `(10 + 20) - 5`
pub fn sum_minus_five() -> Expression {
    Expression::subtract(sum_ten_twenty(), Expression::int(5))
}

/// `"Hello" - "world"`
pub fn subtract_strings() -> Expression {
    Expression::subtract(Expression::string("Hello"), Expression::string("world"))
}

pub fn samples() -> Vec<Sample> {
    vec![
        Sample {
            name: "hello_world",
            expression: hello_world(),
            expected: Expected::Value(Literal::string("Hello world")),
        },
        Sample {
            name: "sum_ten_twenty",
            expression: sum_ten_twenty(),
            expected: Expected::Value(Literal::int(30)),
        },
        Sample {
            name: "sum_with_suffix",
            expression: sum_with_suffix(),
            expected: Expected::Value(Literal::string("30 = 30?")),
        },
        Sample {
            name: "sum_minus_five",
            expression: sum_minus_five(),
            expected: Expected::Value(Literal::int(25)),
        },
        Sample {
            name: "subtract_strings",
            expression: subtract_strings(),
            expected: Expected::InvalidOperation,
        },
    ]
}
