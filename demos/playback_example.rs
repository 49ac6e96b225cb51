use traintrace::{DEFAULT_MAX_LEARNING_RATE, Scenario, TrainError, TrainOptions, Trainer, line_fit_mse};

fn main() -> Result<(), TrainError> {
    env_logger::init();

    println!("=== Training Playback Example ===\n");

    // A rate above the ceiling still trains; it just runs at the ceiling.
    let options = TrainOptions::new()
        .learning_rate(0.1)
        .iterations(400)
        .scenario(Scenario::SalesRevenue)
        .seed(42);
    println!(
        "Requested learning rate {} (ceiling {})",
        options.learning_rate, DEFAULT_MAX_LEARNING_RATE
    );

    let result = Trainer::new(options).train()?;

    println!("Scenario: {}", Scenario::SalesRevenue);
    println!("Points: {}", result.dataset.len());
    println!("Frames retained: {}", result.history.len());

    println!("\nScrubbing the iteration slider:");
    for position in [0, 100, 200, 300, 400] {
        if let Some(frame) = result.state_at(position) {
            println!(
                "iteration {:>3} -> y = {:8.3} + {:.3}x, cost {:.6}",
                frame.iteration, frame.theta0, frame.theta1, frame.cost
            );
        }
    }

    if let Some(fitted) = result.final_entry() {
        let mse = line_fit_mse(&result.dataset, fitted.theta0, fitted.theta1)?;
        println!("\nFinal fit: y = {:.3} + {:.3}x", fitted.theta0, fitted.theta1);
        println!("Cost in normalized space: {:.6}", result.final_cost);
        println!("MSE against the raw points: {:.3}", mse);

        println!("\nProjected beyond the data:");
        for x in [21.0, 22.0, 23.0] {
            println!("x = {x}: predicted y = {:.2}", fitted.predict(x));
        }
    }

    Ok(())
}
