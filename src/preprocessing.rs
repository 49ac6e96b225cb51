//! Column standardization for numerically stable optimization.
//!
//! The optimizer always runs on zero-mean/unit-variance data; the stats
//! captured here are what maps its parameters back into original units.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::TrainError;

/// Population mean and standard deviation of each dataset column.
///
/// Invariant: the stored standard deviations are never zero. A column with
/// no spread is recorded with unit scale so the transform stays defined.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizationStats {
    pub x_mean: f64,
    pub x_std: f64,
    pub y_mean: f64,
    pub y_std: f64,
}

impl NormalizationStats {
    pub fn fit(data: &Dataset) -> Result<Self, TrainError> {
        let x_mean = data.x.mean().ok_or(TrainError::EmptyDataset)?;
        let y_mean = data.y.mean().ok_or(TrainError::EmptyDataset)?;
        Ok(Self {
            x_mean,
            x_std: floor_std(data.x.std(0.0)),
            y_mean,
            y_std: floor_std(data.y.std(0.0)),
        })
    }

    /// Rescales every point to `((x - x_mean)/x_std, (y - y_mean)/y_std)`.
    pub fn transform(&self, data: &Dataset) -> Dataset {
        Dataset {
            x: (&data.x - self.x_mean) / self.x_std,
            y: (&data.y - self.y_mean) / self.y_std,
        }
    }

    pub fn fit_transform(data: &Dataset) -> Result<(Self, Dataset), TrainError> {
        let stats = Self::fit(data)?;
        let normalized = stats.transform(data);
        Ok((stats, normalized))
    }

    /// Maps line parameters fitted in normalized space back to original
    /// units. This is the closed-form inverse of [`Self::transform`]
    /// composed with the line equation; if the transform changes, this must
    /// be re-derived alongside it (the agreement test below checks that).
    pub fn denormalize_theta(&self, theta0: f64, theta1: f64) -> (f64, f64) {
        let slope = theta1 * self.y_std / self.x_std;
        let intercept =
            self.y_mean + theta0 * self.y_std - theta1 * self.x_mean * self.y_std / self.x_std;
        (intercept, slope)
    }
}

// Degenerate-column guard: zero (or non-finite) spread falls back to unit
// scale so normalization never divides by zero.
fn floor_std(std: f64) -> f64 {
    if std > 0.0 && std.is_finite() { std } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use crate::dataset::Scenario;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    #[test]
    fn test_population_stats_on_known_data() {
        let data = Dataset::new(array![1.0, 2.0, 3.0, 4.0], array![10.0, 10.0, 20.0, 20.0])
            .unwrap();
        let stats = NormalizationStats::fit(&data).unwrap();

        assert_abs_diff_eq!(stats.x_mean, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.x_std, 1.25_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(stats.y_mean, 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.y_std, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_yields_standard_columns() {
        let data = Scenario::HousePrices.generate_seeded(5);
        let (_, normalized) = NormalizationStats::fit_transform(&data).unwrap();

        assert_abs_diff_eq!(normalized.x.mean().unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalized.y.mean().unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalized.x.std(0.0), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normalized.y.std(0.0), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_column_uses_unit_scale() {
        let data = Dataset::new(array![1.0, 2.0, 3.0], array![7.0, 7.0, 7.0]).unwrap();
        let stats = NormalizationStats::fit(&data).unwrap();

        assert_eq!(stats.y_std, 1.0);
        let normalized = stats.transform(&data);
        for value in normalized.y.iter() {
            assert!(value.is_finite());
            assert_abs_diff_eq!(*value, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_denormalized_line_agrees_pointwise() {
        let data = Scenario::SalaryExperience.generate_seeded(9);
        let (stats, normalized) = NormalizationStats::fit_transform(&data).unwrap();

        let (theta0, theta1) = (0.3, -1.2);
        let (intercept, slope) = stats.denormalize_theta(theta0, theta1);

        for i in 0..data.len() {
            let through_normalized =
                stats.y_mean + stats.y_std * (theta0 + theta1 * normalized.x[i]);
            let through_original = intercept + slope * data.x[i];
            assert_relative_eq!(through_normalized, through_original, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_fit_rejects_empty_dataset() {
        let data = Dataset::new(Vector::zeros(0), Vector::zeros(0)).unwrap();
        assert_eq!(
            NormalizationStats::fit(&data).unwrap_err(),
            TrainError::EmptyDataset
        );
    }
}
