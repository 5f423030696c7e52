use staged_nn::{Network, Sample, TrainConfig, train_loop};

fn main() -> staged_nn::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut network = Network::new(&[(0, 2), (2, 6), (6, 1)])?;

    let samples = vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ];

    println!("Output before training:");
    for sample in &samples {
        println!("{}", network.predict(sample)?);
    }

    let config = TrainConfig::new(1_000_000, 0.05);
    train_loop(&mut network, &samples, &config, |stats| {
        if stats.epoch % 100_000 == 0 {
            println!("Epoch {}: error = {:.6}", stats.epoch, stats.error);
        }
    })?;

    println!("Output after training:");
    for sample in &samples {
        println!("{}", network.predict(sample)?);
    }
    Ok(())
}
