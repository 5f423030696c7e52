use serde::{Serialize, Deserialize};

/// Per-epoch training statistics handed to the `train_loop` observer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Sum of the per-sample errors, each measured on that sample's forward
    /// pass before its own weight update.
    pub error: f64,
    /// Wall-clock duration of this single epoch in microseconds.
    pub elapsed_us: u64,
}
