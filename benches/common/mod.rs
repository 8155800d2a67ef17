#![allow(dead_code)]
use litexpr::Expression;
use litexpr::fixtures;
use test_support::{DEFAULT_SEED, TreeGenerator};

pub const DEPTHS: [usize; 3] = [4, 10, 16];

/// Full trees of each depth in `DEPTHS`, built from a fixed seed.
pub fn workloads() -> Vec<(String, Expression)> {
    let mut generator = TreeGenerator::new(DEFAULT_SEED, *DEPTHS.iter().max().unwrap_or(&1));
    DEPTHS
        .iter()
        .map(|depth| (format!("full_depth_{depth}"), generator.full_tree(*depth)))
        .collect()
}

pub fn sample_workloads() -> Vec<(String, Expression)> {
    fixtures::samples()
        .into_iter()
        .map(|sample| (sample.name.to_string(), sample.expression))
        .collect()
}
