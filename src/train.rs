//! End-to-end training runs.
//!
//! Ties the pipeline together the way a teaching page consumes it: generate
//! a scenario dataset, standardize it, run the descent, and hand back a
//! [`TrainingResult`] whose history is already in original data units.
//!
//! # Examples
//!
//! ```rust
//! use traintrace::{Scenario, train_model};
//!
//! let result = train_model(0.05, 500, Scenario::HousePrices).unwrap();
//!
//! assert_eq!(result.history.len(), 101);
//! assert!(result.final_cost < 0.5);
//!
//! let frame = result.state_at(250).unwrap();
//! assert!(frame.iteration <= 250);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Scenario};
use crate::error::TrainError;
use crate::history::{HistoryEntry, SampleSchedule, TrainingResult};
use crate::optimizer::{CancelToken, DEFAULT_MAX_LEARNING_RATE, GradientDescent};
use crate::preprocessing::NormalizationStats;

/// Knobs for a full training run. `seed` picks reproducible dataset noise;
/// leaving it unset draws fresh noise per run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainOptions {
    pub learning_rate: f64,
    pub iterations: usize,
    pub scenario: Scenario,
    pub seed: Option<u64>,
    pub max_learning_rate: f64,
}

impl TrainOptions {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.05,
            iterations: 100,
            scenario: Scenario::default(),
            seed: None,
            max_learning_rate: DEFAULT_MAX_LEARNING_RATE,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_learning_rate(mut self, max_learning_rate: f64) -> Self {
        self.max_learning_rate = max_learning_rate;
        self
    }
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the generate → normalize → descend → sample → denormalize pipeline.
pub struct Trainer {
    pub options: TrainOptions,
    pub cancel_token: Option<CancelToken>,
}

impl Trainer {
    pub fn new(options: TrainOptions) -> Self {
        Self {
            options,
            cancel_token: None,
        }
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Generates the configured scenario's dataset and trains on it.
    pub fn train(&self) -> Result<TrainingResult, TrainError> {
        let data = match self.options.seed {
            Some(seed) => self.options.scenario.generate_seeded(seed),
            None => self.options.scenario.generate(),
        };
        self.train_dataset(data)
    }

    /// Trains on a caller-supplied dataset, which the result takes over.
    ///
    /// The descent itself runs on standardized columns; every retained
    /// frame and the final parameters are mapped back to the dataset's
    /// units before they are stored. Costs stay in normalized space, where
    /// runs of different scenarios are comparable.
    pub fn train_dataset(&self, data: Dataset) -> Result<TrainingResult, TrainError> {
        let (stats, normalized) = NormalizationStats::fit_transform(&data)?;
        let schedule = SampleSchedule::new(self.options.iterations);

        let mut engine = GradientDescent::new()
            .learning_rate(self.options.learning_rate)
            .iterations(self.options.iterations)
            .max_learning_rate(self.options.max_learning_rate);
        if let Some(token) = &self.cancel_token {
            engine = engine.cancel_token(token.clone());
        }

        debug!(
            "training on {} points: rate {} (effective {}), {} iterations, stride {}",
            data.len(),
            self.options.learning_rate,
            engine.effective_learning_rate(),
            self.options.iterations,
            schedule.stride
        );

        let mut history = Vec::with_capacity(schedule.retained_count());
        let mut last_cost = 0.0;
        let final_theta = engine.run(&normalized, |step| {
            last_cost = step.cost;
            if schedule.retains(step.iteration) {
                let (theta0, theta1) =
                    stats.denormalize_theta(step.theta.theta0, step.theta.theta1);
                history.push(HistoryEntry {
                    iteration: step.iteration,
                    theta0,
                    theta1,
                    cost: step.cost,
                });
            }
        })?;

        // The engine reports its last iterate unchanged, so this matches
        // the trailing history entry exactly.
        let (final_theta0, final_theta1) =
            stats.denormalize_theta(final_theta.theta0, final_theta.theta1);

        debug!(
            "finished: final cost {:.6}, {} frames retained",
            last_cost,
            history.len()
        );

        Ok(TrainingResult {
            history,
            dataset: data,
            final_cost: last_cost,
            final_theta0,
            final_theta1,
        })
    }
}

/// One-call run over a generated scenario, with ambient dataset noise.
pub fn train_model(
    learning_rate: f64,
    iterations: usize,
    scenario: Scenario,
) -> Result<TrainingResult, TrainError> {
    Trainer::new(
        TrainOptions::new()
            .learning_rate(learning_rate)
            .iterations(iterations)
            .scenario(scenario),
    )
    .train()
}
