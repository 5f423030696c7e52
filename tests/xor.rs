//! XOR convergence with the default seeded initialization.

use staged_nn::{Network, NetworkSpec, Sample, WeightInitConfig};

fn xor_dataset() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

#[test]
fn xor_reference_run_converges() {
    let samples = xor_dataset();
    let mut net = Network::new(&[(0, 2), (2, 6), (6, 1)]).unwrap();

    net.train(&samples, 1_000_000, 0.05).unwrap();

    for sample in &samples {
        let prediction = net.predict(sample).unwrap();
        let diff = (prediction.output()[0] - sample.expected_output[0]).abs();
        assert!(diff < 0.1, "{prediction}");
    }
}

#[test]
fn spec_and_pairs_build_the_same_network() {
    let init = WeightInitConfig::new(3, -1.0, 1.0);
    let from_pairs = Network::with_init(&[(0, 2), (2, 6), (6, 1)], &init).unwrap();
    let from_spec =
        Network::from_spec(&NetworkSpec::new("xor", &[(0, 2), (2, 6), (6, 1)]).with_init(init))
            .unwrap();
    assert_eq!(from_pairs, from_spec);
}

#[test]
fn training_is_reproducible() {
    let samples = xor_dataset();
    let mut a = Network::new(&[(0, 2), (2, 3), (3, 1)]).unwrap();
    let mut b = Network::new(&[(0, 2), (2, 3), (3, 1)]).unwrap();
    a.train(&samples, 200, 0.5).unwrap();
    b.train(&samples, 200, 0.5).unwrap();
    assert_eq!(a, b);
}
