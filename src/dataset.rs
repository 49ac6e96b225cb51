//! Synthetic datasets for the training simulator.
//!
//! Each [`Scenario`] produces a fixed-size single-feature dataset with a
//! known linear trend plus bounded uniform noise, so every training run has
//! something plausible to fit without any file I/O.

use std::fmt;
use std::str::FromStr;

use log::debug;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Vector;
use crate::error::TrainError;

/// Number of points every generated scenario dataset contains.
pub const SCENARIO_SAMPLES: usize = 20;

/// One observation in original (un-normalized) units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Ordered single-feature dataset: an x column and a y column of equal
/// length. Generated datasets have strictly increasing x values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub x: Vector,
    pub y: Vector,
}

impl Dataset {
    pub fn new(x: Vector, y: Vector) -> Result<Self, TrainError> {
        if x.len() != y.len() {
            return Err(TrainError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn from_points(points: &[SamplePoint]) -> Self {
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, index: usize) -> SamplePoint {
        SamplePoint {
            x: self.x[index],
            y: self.y[index],
        }
    }

    pub fn points(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| SamplePoint { x, y })
    }
}

/// The built-in teaching scenarios.
///
/// Underlying trends, with `i` in `0..20` and `u` uniform in `[-0.5, 0.5)`:
///
/// | scenario            | x            | y                                  |
/// |---------------------|--------------|------------------------------------|
/// | `sales-revenue`     | `i + 1`      | `30 + 3.5·i + 10·u`                |
/// | `salary-experience` | `0.5·i`      | `40000 + 8000·x + 5000·u`          |
/// | `house-prices`      | `500 + 100·i`| `200000 + 150·(100·i) + 20000·u`   |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
    SalesRevenue,
    SalaryExperience,
    HousePrices,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::SalesRevenue,
        Scenario::SalaryExperience,
        Scenario::HousePrices,
    ];

    /// Canonical string key, matching the dataset picker labels consumers use.
    pub fn key(&self) -> &'static str {
        match self {
            Scenario::SalesRevenue => "sales-revenue",
            Scenario::SalaryExperience => "salary-experience",
            Scenario::HousePrices => "house-prices",
        }
    }

    /// Resolves a string key, falling back to [`Scenario::SalesRevenue`] when
    /// the key is unknown. The fallback is deliberate compatibility behavior,
    /// not an error; use the [`FromStr`] impl to reject unknown keys instead.
    pub fn from_key_or_default(key: &str) -> Scenario {
        match key.parse() {
            Ok(scenario) => scenario,
            Err(_) => {
                debug!(
                    "unknown dataset scenario {:?}, falling back to {}",
                    key,
                    Scenario::default()
                );
                Scenario::default()
            }
        }
    }

    /// Generates a fresh dataset from ambient randomness. Two calls produce
    /// different noise; use [`Scenario::generate_seeded`] for reproducibility.
    pub fn generate(&self) -> Dataset {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a dataset from a caller-supplied random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Dataset {
        let noise = Vector::random_using(SCENARIO_SAMPLES, Uniform::new(-0.5, 0.5), rng);
        let (x, y) = match self {
            // Revenue grows ~3.5 units per step on a base of 30.
            Scenario::SalesRevenue => (
                Vector::from_shape_fn(SCENARIO_SAMPLES, |i| (i + 1) as f64),
                Vector::from_shape_fn(SCENARIO_SAMPLES, |i| {
                    30.0 + 3.5 * i as f64 + noise[i] * 10.0
                }),
            ),
            // 8000 per year of experience, sampled in half-year steps.
            Scenario::SalaryExperience => (
                Vector::from_shape_fn(SCENARIO_SAMPLES, |i| i as f64 * 0.5),
                Vector::from_shape_fn(SCENARIO_SAMPLES, |i| {
                    40_000.0 + 8_000.0 * (i as f64 * 0.5) + noise[i] * 5_000.0
                }),
            ),
            // 150 per unit of area above a 200k base, lots starting at 500.
            Scenario::HousePrices => (
                Vector::from_shape_fn(SCENARIO_SAMPLES, |i| 500.0 + i as f64 * 100.0),
                Vector::from_shape_fn(SCENARIO_SAMPLES, |i| {
                    200_000.0 + 150.0 * (i as f64 * 100.0) + noise[i] * 20_000.0
                }),
            ),
        };
        Dataset { x, y }
    }

    /// Generates a reproducible dataset from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Dataset {
        self.generate_with(&mut StdRng::seed_from_u64(seed))
    }
}

impl FromStr for Scenario {
    type Err = TrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales-revenue" => Ok(Scenario::SalesRevenue),
            "salary-experience" => Ok(Scenario::SalaryExperience),
            "house-prices" => Ok(Scenario::HousePrices),
            other => Err(TrainError::UnknownScenario(other.to_string())),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_scenarios_generate_fixed_size() {
        for scenario in Scenario::ALL {
            let data = scenario.generate();
            assert_eq!(data.len(), SCENARIO_SAMPLES);
            assert_eq!(data.x.len(), data.y.len());
        }
    }

    #[test]
    fn test_x_strictly_increasing() {
        for scenario in Scenario::ALL {
            let data = scenario.generate_seeded(3);
            for i in 1..data.len() {
                assert!(data.x[i] > data.x[i - 1]);
            }
        }
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let a = Scenario::SalesRevenue.generate_seeded(42);
        let b = Scenario::SalesRevenue.generate_seeded(42);
        assert_eq!(a, b);

        let c = Scenario::SalesRevenue.generate_seeded(43);
        assert_ne!(a.y, c.y);
    }

    #[test]
    fn test_noise_stays_within_bounds() {
        let data = Scenario::SalesRevenue.generate_seeded(11);
        for (i, point) in data.points().enumerate() {
            let trend = 30.0 + 3.5 * i as f64;
            assert!((point.y - trend).abs() <= 5.0);
        }
    }

    #[test]
    fn test_key_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.key().parse::<Scenario>(), Ok(scenario));
            assert_eq!(scenario.to_string(), scenario.key());
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown_key() {
        let err = "student-grades".parse::<Scenario>().unwrap_err();
        assert_eq!(err, TrainError::UnknownScenario("student-grades".to_string()));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(Scenario::from_key_or_default("student-grades"), Scenario::SalesRevenue);
        assert_eq!(Scenario::from_key_or_default("house-prices"), Scenario::HousePrices);
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let err = Dataset::new(array![1.0, 2.0], array![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, TrainError::LengthMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_from_points_round_trip() {
        let points = [
            SamplePoint { x: 1.0, y: 55.0 },
            SamplePoint { x: 2.0, y: 60.0 },
            SamplePoint { x: 3.0, y: 65.0 },
        ];
        let data = Dataset::from_points(&points);
        assert_eq!(data.len(), 3);
        assert_eq!(data.point(1), points[1]);
        let collected: Vec<SamplePoint> = data.points().collect();
        assert_eq!(collected, points);
    }
}
