use traintrace::{Scenario, TrainError, TrainOptions, Trainer, r2_score};

fn main() -> Result<(), TrainError> {
    println!("=== Dataset Scenario Tour ===\n");

    for scenario in Scenario::ALL {
        let result = Trainer::new(
            TrainOptions::new()
                .learning_rate(0.05)
                .iterations(500)
                .scenario(scenario)
                .seed(7),
        )
        .train()?;

        let data = &result.dataset;
        let predictions = &data.x * result.final_theta1 + result.final_theta0;
        let r2 = r2_score(&data.y, &predictions)?;

        println!("{scenario}:");
        println!("  x range: {:.1} .. {:.1}", data.x[0], data.x[data.len() - 1]);
        println!(
            "  fitted line: y = {:.2} + {:.2}x",
            result.final_theta0, result.final_theta1
        );
        println!("  final cost {:.6}, R² {:.4}\n", result.final_cost, r2);
    }

    Ok(())
}
