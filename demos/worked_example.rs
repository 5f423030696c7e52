use staged_nn::{Network, Sample};

fn main() -> staged_nn::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut network = Network::new(&[(0, 2), (2, 2), (2, 2)])?;
    network.set_weights(1, 0, 0.35, &[0.15, 0.2])?;
    network.set_weights(1, 1, 0.35, &[0.25, 0.3])?;
    network.set_weights(2, 0, 0.6, &[0.4, 0.45])?;
    network.set_weights(2, 1, 0.6, &[0.5, 0.55])?;

    let samples = [Sample::new(vec![0.05, 0.10], vec![0.01, 0.99])];

    println!("Output before training:");
    println!("{}", network.predict(&samples[0])?);

    network.train(&samples, 10_000, 0.5)?;

    println!("Output after training:");
    println!("{}", network.predict(&samples[0])?);

    for (i, layer) in network.layers().iter().enumerate().skip(1) {
        for (j, neuron) in layer.neurons().iter().enumerate() {
            println!(
                "layer {i} neuron {j}: bias = {:.6}, weights = {:?}",
                neuron.bias_weight().unwrap_or_default(),
                neuron.weights()
            );
        }
    }
    Ok(())
}
