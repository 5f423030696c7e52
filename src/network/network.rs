use tracing::{debug, warn};

use crate::activation::Sigmoid;
use crate::error::{NnError, Result};
use crate::init::{WeightInitConfig, WeightInitializer};
use crate::layers::Layer;
use crate::loss::SquaredErrorLoss;
use crate::network::sample::{Prediction, Sample};
use crate::network::spec::{LayerSpec, NetworkSpec};
use crate::optim::Sgd;
use crate::train::{train_loop, TrainConfig};

/// A layered feed-forward network with sigmoid units and per-layer bias neurons.
///
/// Layer 0 is the input layer, the last layer is the output layer. Every layer
/// except the output layer carries a bias neuron with constant output 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from `(input_weights, neurons)` pairs using the
    /// default weight initialization.
    pub fn new(layer_dims: &[(usize, usize)]) -> Result<Network> {
        Network::with_init(layer_dims, &WeightInitConfig::default())
    }

    pub fn with_init(layer_dims: &[(usize, usize)], init: &WeightInitConfig) -> Result<Network> {
        let specs: Vec<LayerSpec> = layer_dims.iter().copied().map(LayerSpec::from).collect();
        Network::build(&specs, init)
    }

    pub fn from_spec(spec: &NetworkSpec) -> Result<Network> {
        Network::build(&spec.layers, &spec.init)
    }

    fn build(specs: &[LayerSpec], init: &WeightInitConfig) -> Result<Network> {
        if specs.len() < 2 {
            return Err(NnError::InvalidConfiguration(format!(
                "a network needs at least 2 layers, got {}",
                specs.len()
            )));
        }
        if let Some(i) = specs.iter().position(|s| s.neurons == 0) {
            return Err(NnError::InvalidConfiguration(format!("layer {i} has no neurons")));
        }
        for (i, pair) in specs.windows(2).enumerate() {
            if pair[1].input_weights != pair[0].neurons {
                return Err(NnError::InvalidConfiguration(format!(
                    "layer {} expects {} inputs but layer {} has {} neurons",
                    i + 1,
                    pair[1].input_weights,
                    i,
                    pair[0].neurons
                )));
            }
        }
        if specs[0].input_weights != 0 {
            warn!(
                input_weights = specs[0].input_weights,
                "input layer neurons carry no weights; ignoring configured input_weights"
            );
        }

        let mut initializer = WeightInitializer::new(init)?;
        let output_index = specs.len() - 1;

        let mut layers = Vec::with_capacity(specs.len());
        layers.push(Layer::input(specs[0].neurons));
        for (i, spec) in specs.iter().enumerate().skip(1) {
            layers.push(Layer::weighted(
                spec.neurons,
                spec.input_weights,
                i != output_index,
                &mut initializer,
            ));
        }

        debug!(
            layers = layers.len(),
            shape = ?specs.iter().map(|s| s.neurons).collect::<Vec<_>>(),
            seed = init.seed,
            min = init.min,
            max = init.max,
            "built network"
        );

        Ok(Network { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    pub fn output_size(&self) -> usize {
        self.output_layer().len()
    }

    fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Current outputs of the output layer, in neuron order.
    pub fn output(&self) -> Vec<f64> {
        self.output_layer().outputs().collect()
    }

    /// Forward pass; overwrites every neuron's output left to right and
    /// returns the output layer's activations.
    ///
    /// Fails without touching any neuron when `input` does not match the
    /// input layer's size.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;

        for (neuron, &value) in self.layers[0].neurons_mut().iter_mut().zip(input) {
            neuron.set_output(value);
        }

        for i in 1..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(i);
            let previous = &before[i - 1];
            let bias_output = previous.bias_output();
            for neuron in rest[0].neurons_mut() {
                let net = neuron.net_input(bias_output, previous.outputs());
                neuron.set_output(Sigmoid::function(net));
            }
        }

        Ok(self.output())
    }

    /// Runs `forward` on the sample's data and scores the result.
    pub fn predict(&mut self, sample: &Sample) -> Result<Prediction> {
        self.check_expected(&sample.expected_output)?;
        let output = self.forward(&sample.data)?;
        Ok(Prediction::new(output, sample.expected_output.clone()))
    }

    /// Backward pass for the sample last fed through `forward`.
    ///
    /// Gradients and staged weights for every layer are computed from the
    /// weights as they stood before this call; live weights change only in
    /// the final commit.
    pub fn backward(&mut self, sample: &Sample, learning_rate: f64) -> Result<()> {
        self.backward_with(&sample.expected_output, &Sgd::new(learning_rate))
    }

    pub(crate) fn backward_with(&mut self, expected: &[f64], optimizer: &Sgd) -> Result<()> {
        self.check_expected(expected)?;
        let output_index = self.layers.len() - 1;

        // Output layer: δ = (o - t) · σ'(o)
        {
            let (before, rest) = self.layers.split_at_mut(output_index);
            let previous = &before[output_index - 1];
            for (neuron, &target) in rest[0].neurons_mut().iter_mut().zip(expected) {
                let output = neuron.output();
                let delta = SquaredErrorLoss::derivative(output, target) * Sigmoid::derivative(output);
                neuron.set_gradient(delta);
                optimizer.stage(neuron, previous);
            }
        }

        // Hidden layers, right to left. The next layer's bias neuron has no
        // weights and no gradient, so it never contributes to the sum.
        for i in (1..output_index).rev() {
            let (before, rest) = self.layers.split_at_mut(i);
            let (current, after) = rest.split_at_mut(1);
            let previous = &before[i - 1];
            let next = &after[0];

            for (j, neuron) in current[0].neurons_mut().iter_mut().enumerate() {
                let gradient_sum: f64 = next
                    .neurons()
                    .iter()
                    .map(|n| n.weights()[j] * n.gradient())
                    .sum();
                let delta = gradient_sum * Sigmoid::derivative(neuron.output());
                neuron.set_gradient(delta);
                optimizer.stage(neuron, previous);
            }
        }

        self.commit();
        Ok(())
    }

    fn commit(&mut self) {
        for layer in self.layers.iter_mut().skip(1) {
            layer.commit();
        }
    }

    /// Trains online for `epochs` passes over `samples`, in order.
    pub fn train(&mut self, samples: &[Sample], epochs: usize, learning_rate: f64) -> Result<()> {
        let config = TrainConfig::new(epochs, learning_rate);
        train_loop(self, samples, &config, |_| {})?;
        Ok(())
    }

    /// Pins one neuron's weights, e.g. to reproduce a worked example.
    pub fn set_weights(
        &mut self,
        layer_index: usize,
        neuron_index: usize,
        bias_weight: f64,
        weights: &[f64],
    ) -> Result<()> {
        let layer_count = self.layers.len();
        if layer_index == 0 {
            return Err(NnError::UnweightedLayer(0));
        }
        let layer = self.layers.get_mut(layer_index).ok_or(NnError::IndexOutOfRange {
            what: "layer",
            index: layer_index,
            len: layer_count,
        })?;
        let neuron_count = layer.len();
        let neuron = layer.neuron_mut(neuron_index).ok_or(NnError::IndexOutOfRange {
            what: "neuron",
            index: neuron_index,
            len: neuron_count,
        })?;
        if weights.len() != neuron.weight_count() {
            return Err(NnError::dimension("weights", neuron.weight_count(), weights.len()));
        }

        neuron.set_weights(bias_weight, weights);
        Ok(())
    }

    pub(crate) fn check_sample(&self, sample: &Sample) -> Result<()> {
        self.check_input(&sample.data)?;
        self.check_expected(&sample.expected_output)
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(NnError::dimension("input", self.input_size(), input.len()));
        }
        Ok(())
    }

    fn check_expected(&self, expected: &[f64]) -> Result<()> {
        if expected.len() != self.output_size() {
            return Err(NnError::dimension("expected output", self.output_size(), expected.len()));
        }
        Ok(())
    }
}
