/// Errors surfaced by the training pipeline.
///
/// The engine itself never fails on numerically valid input; these cover the
/// structural conditions around it (malformed datasets, strict scenario
/// parsing, cancelled runs).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    #[error("mismatched sample counts: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("dataset must contain at least one sample")]
    EmptyDataset,

    #[error("unknown dataset scenario key: {0:?}")]
    UnknownScenario(String),

    #[error("training run was cancelled")]
    Cancelled,
}
