//! Batch gradient descent for the single-feature linear model.
//!
//! The engine fits `y = theta0 + theta1 * x` by full-batch updates and
//! reports every iterate through an observer callback, so callers decide
//! what to retain without the engine buffering anything itself.
//!
//! # Examples
//!
//! ```rust
//! use traintrace::{GradientDescent, NormalizationStats, Scenario};
//!
//! let data = Scenario::SalesRevenue.generate_seeded(7);
//! let (_, normalized) = NormalizationStats::fit_transform(&data).unwrap();
//!
//! let mut costs = Vec::new();
//! let engine = GradientDescent::new().learning_rate(0.05).iterations(100);
//! let theta = engine.run(&normalized, |step| costs.push(step.cost)).unwrap();
//!
//! assert_eq!(costs.len(), 101);
//! assert!(theta.theta1 > 0.0);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::TrainError;

/// Ceiling applied to every requested learning rate.
///
/// On standardized columns the batch update diverges once the step size
/// passes the curvature limit of the half-MSE bowl; 0.08 keeps every run
/// visibly convergent. Raise it per run with
/// [`GradientDescent::max_learning_rate`] if divergence is the point.
pub const DEFAULT_MAX_LEARNING_RATE: f64 = 0.08;

/// Parameters of the fitted line, in whichever units the data was given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theta {
    pub theta0: f64,
    pub theta1: f64,
}

impl Theta {
    pub fn zeros() -> Self {
        Self {
            theta0: 0.0,
            theta1: 0.0,
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.theta0 + self.theta1 * x
    }
}

/// One observed iterate: the parameters entering iteration `iteration` and
/// the cost they produce, measured before any update is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GdStep {
    pub iteration: usize,
    pub theta: Theta,
    pub cost: f64,
}

/// Shared flag for aborting a run from another thread.
///
/// Clones share the same flag. Once set it stays set, so a token is good
/// for one logical run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Configurable batch gradient-descent engine.
///
/// Built in the consuming-setter style: `GradientDescent::new()` gives the
/// stock configuration (rate 0.05, 100 iterations) and each setter returns
/// the adjusted engine.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    pub learning_rate: f64,
    pub iterations: usize,
    pub max_learning_rate: f64,
    pub cancel_token: Option<CancelToken>,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.05,
            iterations: 100,
            max_learning_rate: DEFAULT_MAX_LEARNING_RATE,
            cancel_token: None,
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

    pub fn max_learning_rate(mut self, max_learning_rate: f64) -> Self {
        self.max_learning_rate = max_learning_rate;
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// The step size actually used: the requested rate clamped to the
    /// configured ceiling.
    pub fn effective_learning_rate(&self) -> f64 {
        self.learning_rate.min(self.max_learning_rate)
    }

    /// Runs the descent, calling `observe` once per iterate.
    ///
    /// Iterates are numbered `0..=iterations`: iteration 0 is the starting
    /// point (all-zero parameters) and the final iterate receives no
    /// update, so `observe` fires `iterations + 1` times. Each reported
    /// cost is half the mean squared residual of the parameters being
    /// reported, never of the updated ones.
    ///
    /// Returns the final parameters, or [`TrainError::Cancelled`] as soon
    /// as an attached token is observed set. Structurally unusable datasets
    /// (unequal columns, no points) are rejected before the loop starts.
    pub fn run(
        &self,
        data: &Dataset,
        mut observe: impl FnMut(GdStep),
    ) -> Result<Theta, TrainError> {
        if data.x.len() != data.y.len() {
            return Err(TrainError::LengthMismatch {
                left: data.x.len(),
                right: data.y.len(),
            });
        }
        if data.is_empty() {
            return Err(TrainError::EmptyDataset);
        }

        let alpha = self.effective_learning_rate();
        if alpha < self.learning_rate {
            debug!(
                "learning rate {} clamped to {}",
                self.learning_rate, alpha
            );
        }

        let n = data.len() as f64;
        let mut theta = Theta::zeros();

        for iteration in 0..=self.iterations {
            if let Some(token) = &self.cancel_token {
                if token.is_cancelled() {
                    return Err(TrainError::Cancelled);
                }
            }

            let residuals = &data.x * theta.theta1 + theta.theta0 - &data.y;
            let cost = residuals.mapv(|r| r * r).sum() / (2.0 * n);
            observe(GdStep {
                iteration,
                theta,
                cost,
            });

            // The last iterate is reported as-is; updating it would leave
            // parameters whose cost no observer ever saw.
            if iteration < self.iterations {
                let gradient0 = residuals.sum() / n;
                let gradient1 = residuals.dot(&data.x) / n;
                theta.theta0 -= alpha * gradient0;
                theta.theta1 -= alpha * gradient1;
            }
        }

        Ok(theta)
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}
