use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Terminal value produced by evaluation.
///
/// Equality and hashing are structural: an `Int` never equals a `String`,
/// even when both render to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i64),
    String(String),
}

impl Literal {
    pub fn int(value: i64) -> Self {
        Literal::Int(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Literal::String(value.into())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Int(value) => Some(*value),
            Literal::String(_) => None,
        }
    }

    /// Canonical rendering: decimal for integers, raw text for strings.
    pub fn as_text(&self) -> String {
        match self {
            Literal::Int(value) => value.to_string(),
            Literal::String(value) => value.clone(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::String(_) => "str",
        }
    }

    /// Integer hash consistent with `PartialEq`.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{value}"),
            Literal::String(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}
