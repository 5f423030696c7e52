use std::time::Instant;

use tracing::{info, trace};

use crate::error::Result;
use crate::network::{Network, Sample};
use crate::optim::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{check_samples, run_epoch};

/// Trains `network` for exactly `config.epochs` epochs and returns the summed
/// error of the **last completed epoch** (0 when `epochs` is 0).
///
/// `on_epoch` is called once per epoch with that epoch's statistics. There is
/// no early stopping: the observer can watch but not cut a run short.
///
/// # Errors
/// `DimensionMismatch` if any sample disagrees with the network's shape; this
/// is detected before the first update.
pub fn train_loop<F>(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
    mut on_epoch: F,
) -> Result<f64>
where
    F: FnMut(&EpochStats),
{
    check_samples(network, samples)?;

    let optimizer = Sgd::new(config.learning_rate);
    let mut last_error = 0.0;

    info!(
        epochs = config.epochs,
        samples = samples.len(),
        learning_rate = config.learning_rate,
        "training started"
    );

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let error = run_epoch(network, samples, &optimizer)?;
        last_error = error;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            error,
            elapsed_us: t_start.elapsed().as_micros() as u64,
        };
        trace!(epoch, error, "epoch finished");
        on_epoch(&stats);
    }

    info!(epochs = config.epochs, error = last_error, "training finished");
    Ok(last_error)
}
