use traintrace::{Scenario, TrainError, TrainingResult, train_model};

fn main() -> Result<(), TrainError> {
    println!("=== Result Export Example ===\n");

    let result = train_model(0.05, 150, Scenario::SalaryExperience)?;

    let json = serde_json::to_string_pretty(&result).unwrap();
    println!("Serialized {} bytes of playback state:", json.len());
    for line in json.lines().take(12) {
        println!("{line}");
    }
    println!("...");

    let restored: TrainingResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
    println!(
        "\nRestored {} frames; final cost {:.6}",
        restored.history.len(),
        restored.final_cost
    );

    Ok(())
}
