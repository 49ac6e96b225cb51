//! Fit-quality metrics for fitted lines.
//!
//! The optimizer reports half-MSE as its cost; these helpers measure plain
//! MSE and R² so a finished fit can be judged against the raw data.

use crate::Vector;
use crate::dataset::Dataset;
use crate::error::TrainError;

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, TrainError> {
    if y_true.len() != y_pred.len() {
        return Err(TrainError::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }

    let diff = y_true - y_pred;
    diff.mapv(|x| x * x).mean().ok_or(TrainError::EmptyDataset)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, TrainError> {
    if y_true.len() != y_pred.len() {
        return Err(TrainError::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }

    let y_mean = y_true.mean().ok_or(TrainError::EmptyDataset)?;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        // Constant targets: any exact fit counts as perfect.
        return Ok(1.0);
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// MSE of the line `y = intercept + slope * x` over a dataset, for judging
/// a denormalized fit directly against the points it was trained on.
pub fn line_fit_mse(data: &Dataset, intercept: f64, slope: f64) -> Result<f64, TrainError> {
    let predictions = &data.x * slope + intercept;
    mean_squared_error(&data.y, &predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error_is_zero_for_exact_predictions() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_squared_error_known_value() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 2.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_perfect_fit() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_constant_targets() {
        let y_true = array![5.0, 5.0, 5.0];
        let y_pred = array![5.0, 5.0, 5.0];

        assert_eq!(r2_score(&y_true, &y_pred).unwrap(), 1.0);
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0, 2.0, 3.0];

        assert_eq!(
            mean_squared_error(&y_true, &y_pred).unwrap_err(),
            TrainError::LengthMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_line_fit_mse_on_exact_line() {
        let x = Vector::from_iter((1..=8).map(|i| i as f64));
        let y = x.mapv(|x| 50.0 + 5.0 * x);
        let data = Dataset::new(x, y).unwrap();

        let mse = line_fit_mse(&data, 50.0, 5.0).unwrap();
        assert!(mse.abs() < 1e-10);
    }
}
