use anyhow::{Result, ensure};

use crate::evaluator::{self, EvalError};
use crate::fixtures::{self, Expected};

#[test]
fn samples_match_expectations_across_evaluators() -> Result<()> {
    for sample in fixtures::samples() {
        for evaluator in evaluator::evaluators() {
            let result = evaluator.evaluate(&sample.expression);
            match &sample.expected {
                Expected::Value(expected) => {
                    ensure!(
                        result.as_ref() == Ok(expected),
                        "Evaluator {} mismatch for {}: expected {expected:?}, got {result:?}",
                        evaluator.name(),
                        sample.name
                    );
                }
                Expected::InvalidOperation => {
                    ensure!(
                        matches!(result, Err(EvalError::InvalidOperation { .. })),
                        "Expected InvalidOperation from {} for {}, got {result:?}",
                        evaluator.name(),
                        sample.name
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn evaluators_agree_on_samples() -> Result<()> {
    let evaluators = evaluator::evaluators();
    for sample in fixtures::samples() {
        let results: Vec<_> = evaluators
            .iter()
            .map(|evaluator| evaluator.evaluate(&sample.expression))
            .collect();
        for (evaluator, result) in evaluators.iter().zip(&results).skip(1) {
            ensure!(
                result == &results[0],
                "Evaluator {} disagrees with {} on {}: {result:?} vs {:?}",
                evaluator.name(),
                evaluators[0].name(),
                sample.name,
                results[0]
            );
        }
    }
    Ok(())
}

#[test]
fn evaluation_is_repeatable() -> Result<()> {
    let tree = fixtures::subtract_strings();
    for evaluator in evaluator::evaluators() {
        let first = evaluator.evaluate(&tree);
        let second = evaluator.evaluate(&tree);
        ensure!(
            first == second,
            "Evaluator {} is not deterministic",
            evaluator.name()
        );
    }
    Ok(())
}

#[test]
fn trees_evaluate_concurrently() -> Result<()> {
    let tree = fixtures::sum_with_suffix();
    std::thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| evaluator::evaluate_static(&tree)))
            .collect();
        for handle in handles {
            let result = handle
                .join()
                .map_err(|_| anyhow::anyhow!("evaluation thread panicked"))?;
            ensure!(result == evaluator::delegated::Evaluate::evaluate(&tree));
        }
        Ok(())
    })
}
