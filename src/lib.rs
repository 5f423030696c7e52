pub mod error;
pub mod activation;
pub mod init;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NnError, Result};
pub use activation::Sigmoid;
pub use init::{WeightInitConfig, WeightInitializer};
pub use layers::{Layer, Neuron};
pub use loss::SquaredErrorLoss;
pub use network::{LayerSpec, Network, NetworkSpec, Prediction, Sample};
pub use optim::Sgd;
pub use train::{train_loop, train_network, EpochStats, TrainConfig};
