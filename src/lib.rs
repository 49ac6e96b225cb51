//! Batch gradient-descent training runs, recorded for playback.
//!
//! This crate simulates fitting a single-feature linear model the way a
//! teaching visualization replays it: a small scenario dataset is generated
//! with noise, standardized, fitted by batch gradient descent, and the
//! sampled trajectory is mapped back to original units so every frame can
//! be drawn over the raw points.
//!
//! # Examples
//!
//! ```rust
//! use traintrace::{Scenario, train_model};
//!
//! let result = train_model(0.1, 200, Scenario::SalesRevenue).unwrap();
//! let halfway = result.state_at(100).unwrap();
//! let fitted = result.final_entry().unwrap();
//!
//! assert!(fitted.cost <= halfway.cost);
//! println!("fitted line: y = {:.2} + {:.2}x", fitted.theta0, fitted.theta1);
//! ```

pub use ndarray::Array1;

pub mod dataset;
pub mod error;
pub mod history;
pub mod metrics;
pub mod optimizer;
pub mod preprocessing;
pub mod train;

pub type Vector = Array1<f64>;

pub use dataset::{Dataset, SCENARIO_SAMPLES, SamplePoint, Scenario};
pub use error::TrainError;
pub use history::{HistoryEntry, SampleSchedule, TrainingResult};
pub use metrics::{line_fit_mse, mean_squared_error, r2_score};
pub use optimizer::{CancelToken, DEFAULT_MAX_LEARNING_RATE, GdStep, GradientDescent, Theta};
pub use preprocessing::NormalizationStats;
pub use train::{TrainOptions, Trainer, train_model};
