use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail, ensure};
use litexpr::{Expression, Literal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

pub const DEFAULT_SEED: u64 = 0x5eed_1e57;
pub const DEFAULT_CASES: usize = 512;
pub const DEFAULT_MAX_DEPTH: usize = 8;

const STRING_ALPHABET: &[u8] = b"abcxyz HW0123456789=?-";

/// Reads `name` from the environment, falling back to `default` when unset.
pub fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|err| anyhow!("Invalid {name}='{raw}': {err}")),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("Reading {name}")),
    }
}

pub fn case_count() -> Result<usize> {
    env_or("LITEXPR_CASES", DEFAULT_CASES)
}

/// Seeded generator of random well-formed expression trees.
pub struct TreeGenerator {
    rng: StdRng,
    max_depth: usize,
}

impl TreeGenerator {
    pub fn new(seed: u64, max_depth: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_depth: max_depth.max(1),
        }
    }

    /// Generator configured from `LITEXPR_SEED` and `LITEXPR_MAX_DEPTH`.
    pub fn from_env() -> Result<Self> {
        let seed = env_or("LITEXPR_SEED", DEFAULT_SEED)?;
        let max_depth = env_or("LITEXPR_MAX_DEPTH", DEFAULT_MAX_DEPTH)?;
        Ok(Self::new(seed, max_depth))
    }

    pub fn expression(&mut self) -> Expression {
        self.subtree(self.max_depth)
    }

    /// Full binary tree of exactly `depth` levels.
    pub fn full_tree(&mut self, depth: usize) -> Expression {
        if depth <= 1 {
            return Expression::Literal(self.literal());
        }
        let left = self.full_tree(depth - 1);
        let right = self.full_tree(depth - 1);
        self.operator(left, right)
    }

    pub fn literal(&mut self) -> Literal {
        if self.rng.random_bool(0.75) {
            Literal::Int(self.int())
        } else {
            let len = self.rng.random_range(0..6);
            let text = (0..len)
                .map(|_| STRING_ALPHABET[self.rng.random_range(0..STRING_ALPHABET.len())] as char)
                .collect::<String>();
            Literal::String(text)
        }
    }

    fn int(&mut self) -> i64 {
        match self.rng.random_range(0..20) {
            0 => i64::MAX,
            1 => i64::MIN,
            _ => self.rng.random_range(-1000..=1000),
        }
    }

    fn subtree(&mut self, depth: usize) -> Expression {
        if depth <= 1 || self.rng.random_bool(0.3) {
            return Expression::Literal(self.literal());
        }
        let left = self.subtree(depth - 1);
        let right = self.subtree(depth - 1);
        self.operator(left, right)
    }

    fn operator(&mut self, left: Expression, right: Expression) -> Expression {
        if self.rng.random_bool(0.5) {
            Expression::add(left, right)
        } else {
            Expression::subtract(left, right)
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseClass {
    Value,
    InvalidOperation,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LiteralSpec {
    pub int: Option<i64>,
    pub string: Option<String>,
}

/// Structured tree node: exactly one of the fields is set.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeSpec {
    pub int: Option<i64>,
    pub string: Option<String>,
    pub add: Option<Vec<TreeSpec>>,
    pub subtract: Option<Vec<TreeSpec>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedOutcome {
    pub class: CaseClass,
    pub value: Option<LiteralSpec>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CaseSpec {
    pub tree: TreeSpec,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub path: PathBuf,
    pub spec: CaseSpec,
}

impl LiteralSpec {
    pub fn to_literal(&self) -> Result<Literal> {
        match (self.int, &self.string) {
            (Some(value), None) => Ok(Literal::Int(value)),
            (None, Some(value)) => Ok(Literal::String(value.clone())),
            _ => bail!("Literal must set exactly one of 'int' or 'string', got {self:?}"),
        }
    }
}

impl TreeSpec {
    pub fn to_expression(&self) -> Result<Expression> {
        match (self.int, &self.string, &self.add, &self.subtract) {
            (Some(value), None, None, None) => Ok(Expression::int(value)),
            (None, Some(value), None, None) => Ok(Expression::string(value.clone())),
            (None, None, Some(operands), None) => {
                let (left, right) = binary_operands("add", operands)?;
                Ok(Expression::add(left, right))
            }
            (None, None, None, Some(operands)) => {
                let (left, right) = binary_operands("subtract", operands)?;
                Ok(Expression::subtract(left, right))
            }
            _ => bail!(
                "Tree node must set exactly one of 'int', 'string', 'add' or 'subtract', got {self:?}"
            ),
        }
    }
}

fn binary_operands(operator: &str, operands: &[TreeSpec]) -> Result<(Expression, Expression)> {
    let [left, right] = operands else {
        bail!(
            "Operator '{operator}' expects 2 operands, got {}",
            operands.len()
        );
    };
    Ok((left.to_expression()?, right.to_expression()?))
}

impl Case {
    pub fn expression(&self) -> Result<Expression> {
        self.spec
            .tree
            .to_expression()
            .with_context(|| format!("Building tree for case {}", self.name))
    }

    pub fn expected_value(&self) -> Result<Literal> {
        self.spec
            .expected
            .value
            .as_ref()
            .with_context(|| format!("Missing expected value in {}", self.name))?
            .to_literal()
    }
}

pub fn load_cases(cases_dir: &Path) -> Result<Vec<Case>> {
    let mut cases = Vec::new();

    for entry in
        fs::read_dir(cases_dir).with_context(|| format!("Reading {}", cases_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let case_path = path.join("case.yaml");
        if !case_path.exists() {
            continue;
        }

        let case_name = path
            .file_name()
            .and_then(|value| value.to_str())
            .map(str::to_string)
            .with_context(|| format!("Invalid case directory name {}", path.display()))?;
        let case_raw = fs::read_to_string(&case_path)
            .with_context(|| format!("Reading {}", case_path.display()))?;
        let spec: CaseSpec = serde_yaml::from_str(&case_raw)
            .with_context(|| format!("Parsing {}", case_path.display()))?;

        cases.push(Case {
            name: case_name,
            path: case_path,
            spec,
        });
    }

    ensure!(
        !cases.is_empty(),
        "No test cases found in {}",
        cases_dir.display()
    );
    cases.sort_by(|left, right| left.name.cmp(&right.name));
    Ok(cases)
}
