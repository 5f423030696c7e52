use crate::{
    error::Result,
    loss::SquaredErrorLoss,
    network::{Network, Sample},
    optim::Sgd,
};

/// Runs one online epoch: forward then backward for each sample, in order.
/// Returns the summed error measured before each sample's update.
///
/// Every sample is shape-checked before the first update, so a bad sample
/// leaves the network untouched.
pub fn train_network(
    network: &mut Network,
    samples: &[Sample],
    optimizer: &Sgd,
) -> Result<f64> {
    check_samples(network, samples)?;
    run_epoch(network, samples, optimizer)
}

pub(crate) fn check_samples(network: &Network, samples: &[Sample]) -> Result<()> {
    samples.iter().try_for_each(|sample| network.check_sample(sample))
}

pub(crate) fn run_epoch(
    network: &mut Network,
    samples: &[Sample],
    optimizer: &Sgd,
) -> Result<f64> {
    let mut total_error = 0.0;

    for sample in samples {
        let output = network.forward(&sample.data)?;
        total_error += SquaredErrorLoss::loss(&output, &sample.expected_output);
        network.backward_with(&sample.expected_output, optimizer)?;
    }

    Ok(total_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_error_matches_pre_update_predictions() {
        let mut network = Network::new(&[(0, 2), (2, 2), (2, 1)]).unwrap();
        let sample = Sample::new(vec![0.2, 0.8], vec![1.0]);
        let expected_error = network.clone().predict(&sample).unwrap().error();

        let error = train_network(&mut network, &[sample], &Sgd::new(0.5)).unwrap();
        assert!((error - expected_error).abs() < 1e-15);
    }

    #[test]
    fn bad_sample_aborts_before_any_update() {
        let mut network = Network::new(&[(0, 2), (2, 1)]).unwrap();
        let before = network.clone();
        let samples = [
            Sample::new(vec![1.0, 1.0], vec![0.0]),
            Sample::new(vec![1.0, 1.0], vec![0.0, 1.0]),
        ];
        assert!(train_network(&mut network, &samples, &Sgd::new(0.5)).is_err());
        assert_eq!(network, before);
    }
}
