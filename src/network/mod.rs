pub mod network;
pub mod sample;
pub mod spec;

pub use network::Network;
pub use sample::{Prediction, Sample};
pub use spec::{LayerSpec, NetworkSpec};
