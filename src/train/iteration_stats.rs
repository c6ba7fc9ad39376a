use serde::{Serialize, Deserialize};

/// Per-iteration training statistics emitted by `run_training`.
///
/// The report callback passed to `run_training` receives one
/// `IterationStats` value at the end of every completed iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 0-based iteration number.
    pub iteration: usize,
    /// Total absolute output error, summed over every batch of this
    /// iteration.
    pub loss: f64,
    /// Total absolute mismatch between the synthetic gradient a layer bet
    /// on and the true-derived gradient it later received, summed the same
    /// way.
    pub synthetic_loss: f64,
}
