//! The classic 2-2-2 backpropagation walkthrough with pinned weights.

use staged_nn::{train_loop, Network, Sample, TrainConfig};

fn pinned_network() -> Network {
    let mut net = Network::new(&[(0, 2), (2, 2), (2, 2)]).unwrap();
    net.set_weights(1, 0, 0.35, &[0.15, 0.2]).unwrap();
    net.set_weights(1, 1, 0.35, &[0.25, 0.3]).unwrap();
    net.set_weights(2, 0, 0.6, &[0.4, 0.45]).unwrap();
    net.set_weights(2, 1, 0.6, &[0.5, 0.55]).unwrap();
    net
}

fn sample() -> Sample {
    Sample::new(vec![0.05, 0.10], vec![0.01, 0.99])
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn prediction_before_training_matches_hand_computation() {
    let mut net = pinned_network();
    let prediction = net.predict(&sample()).unwrap();

    assert_close(prediction.output()[0], 0.75136507, 1e-8);
    assert_close(prediction.output()[1], 0.772928465, 1e-8);
    assert_close(prediction.error(), 0.298371109, 1e-8);

    let hidden: Vec<f64> = net.layers()[1].outputs().collect();
    assert_close(hidden[0], 0.593269992, 1e-8);
    assert_close(hidden[1], 0.596884378, 1e-8);
}

#[test]
fn one_backward_pass_matches_hand_computation() {
    let mut net = pinned_network();
    let sample = sample();
    net.forward(&sample.data).unwrap();
    net.backward(&sample, 0.5).unwrap();

    let layers = net.layers();
    // Output layer
    assert_close(layers[2].neurons()[0].weights()[0], 0.35891648, 1e-8);
    assert_close(layers[2].neurons()[0].weights()[1], 0.408666186, 1e-8);
    assert_close(layers[2].neurons()[1].weights()[0], 0.511301270, 1e-8);
    assert_close(layers[2].neurons()[1].weights()[1], 0.561370121, 1e-8);
    // Hidden layer, derived from the output weights before their update
    assert_close(layers[1].neurons()[0].weights()[0], 0.149780716, 1e-8);
    assert_close(layers[1].neurons()[0].weights()[1], 0.19956143, 1e-8);
    assert_close(layers[1].neurons()[1].weights()[0], 0.24975114, 1e-8);
    assert_close(layers[1].neurons()[1].weights()[1], 0.29950229, 1e-8);
}

#[test]
fn training_error_decreases_every_epoch() {
    let mut net = pinned_network();
    let samples = [sample()];
    let mut errors = Vec::with_capacity(10_000);

    train_loop(&mut net, &samples, &TrainConfig::new(10_000, 0.5), |stats| {
        errors.push(stats.error)
    })
    .unwrap();

    assert_eq!(errors.len(), 10_000);
    assert_close(errors[0], 0.298371109, 1e-8);
    for (epoch, pair) in errors.windows(2).enumerate() {
        assert!(
            pair[1] < pair[0],
            "error rose after epoch {}: {} -> {}",
            epoch + 1,
            pair[0],
            pair[1]
        );
    }

    let prediction = net.predict(&samples[0]).unwrap();
    assert!(prediction.error() < 1e-4, "final error {}", prediction.error());
    assert!(prediction.error() < errors[errors.len() - 1]);
}

#[test]
fn train_matches_train_loop() {
    let samples = [sample()];

    let mut a = pinned_network();
    a.train(&samples, 50, 0.5).unwrap();

    let mut b = pinned_network();
    train_loop(&mut b, &samples, &TrainConfig::new(50, 0.5), |_| {}).unwrap();

    assert_eq!(a, b);
}
