use anyhow::{Result, bail};

use litexpr::evaluator::{self, Evaluator};
use litexpr::fixtures;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let mut evaluator_name = "centralized".to_string();
    let mut run_all = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--evaluator" | "-e" => {
                evaluator_name = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("Missing evaluator name after {arg}"))?;
            }
            "--all" => run_all = true,
            _ => bail!("Unknown argument '{arg}'"),
        }
    }

    let selected: Vec<Box<dyn Evaluator>> = if run_all {
        evaluator::evaluators()
    } else {
        match evaluator::evaluator_by_name(&evaluator_name) {
            Some(evaluator) => vec![evaluator],
            None => bail!("Unknown evaluator '{evaluator_name}'"),
        }
    };

    for evaluator in &selected {
        if run_all {
            println!("[{}]", evaluator.name());
        }
        for sample in fixtures::samples() {
            match evaluator.evaluate(&sample.expression) {
                Ok(value) => println!("{} = {value}", sample.name),
                Err(err) => println!("{}: error: {err}", sample.name),
            }
        }
    }

    Ok(())
}
