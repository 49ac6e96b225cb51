//! Retained training trajectories and the schedule that thins them.
//!
//! A full run can produce thousands of iterates; playback only needs about
//! a hundred frames. [`SampleSchedule`] decides which iterations survive,
//! and [`TrainingResult`] is the bundle a frontend scrubs through.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Decides which iterations of a run are kept in the history.
///
/// The stride is `max(1, iterations / 100)`, so runs up to 100 iterations
/// keep every iterate and longer runs keep roughly one per percent. The
/// final iterate is always kept, whether or not it falls on the stride.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleSchedule {
    pub iterations: usize,
    pub stride: usize,
}

impl SampleSchedule {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            stride: (iterations / 100).max(1),
        }
    }

    pub fn retains(&self, iteration: usize) -> bool {
        iteration % self.stride == 0 || iteration == self.iterations
    }

    /// Exact number of retained iterations, usable as a `Vec` capacity.
    pub fn retained_count(&self) -> usize {
        let on_stride = self.iterations / self.stride + 1;
        if self.iterations % self.stride == 0 {
            on_stride
        } else {
            on_stride + 1
        }
    }
}

/// One retained frame: iteration number, the line parameters in original
/// data units, and the cost measured before that iteration's update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub iteration: usize,
    pub theta0: f64,
    pub theta1: f64,
    pub cost: f64,
}

impl HistoryEntry {
    pub fn predict(&self, x: f64) -> f64 {
        self.theta0 + self.theta1 * x
    }
}

/// Everything a playback surface needs: the sampled trajectory, the data it
/// was fitted on, and the final state duplicated for direct access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub history: Vec<HistoryEntry>,
    pub dataset: Dataset,
    pub final_cost: f64,
    pub final_theta0: f64,
    pub final_theta1: f64,
}

impl TrainingResult {
    /// The frame to draw at playback position `iteration`: the latest
    /// retained entry at or before it. Positions before the first entry
    /// (only possible on an empty history) give `None`.
    pub fn state_at(&self, iteration: usize) -> Option<&HistoryEntry> {
        self.history.iter().rev().find(|entry| entry.iteration <= iteration)
    }

    pub fn final_entry(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }
}
