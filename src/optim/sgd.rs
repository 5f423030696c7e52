use crate::layers::{Layer, Neuron};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Stages one SGD step for `neuron` from its already computed gradient.
    ///
    /// Reads only the live weights of `neuron` and the outputs of `previous`;
    /// the result lands in the neuron's staging buffer and stays there until
    /// the network commits.
    pub fn stage(&self, neuron: &mut Neuron, previous: &Layer) {
        let Some(bias_weight) = neuron.bias_weight() else {
            return;
        };
        let step = self.learning_rate * neuron.gradient();

        let staged_bias = bias_weight - step * previous.bias_output();
        let inputs = previous.neurons();
        neuron.stage(staged_bias, |k, weight| weight - step * inputs[k].output());
    }
}
