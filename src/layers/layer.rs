use crate::init::WeightInitializer;
use crate::layers::neuron::Neuron;

/// An ordered run of neurons plus an optional bias neuron.
///
/// Neuron indices are the wiring contract: weight `k` of a neuron in the
/// next layer reads the output of neuron `k` here.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    bias_neuron: Option<Neuron>,
}

impl Layer {
    /// Input layer: `size` unweighted neurons followed by a bias neuron.
    pub fn input(size: usize) -> Layer {
        Layer {
            neurons: (0..size).map(|_| Neuron::input()).collect(),
            bias_neuron: Some(Neuron::bias()),
        }
    }

    /// Weighted layer whose neurons each read `input_size` outputs.
    /// Every layer but the output layer carries a bias neuron.
    pub fn weighted(
        size: usize,
        input_size: usize,
        with_bias_neuron: bool,
        init: &mut WeightInitializer,
    ) -> Layer {
        let neurons = (0..size)
            .map(|_| {
                let bias_weight = init.next_weight();
                Neuron::weighted(bias_weight, init.weights(input_size))
            })
            .collect();

        Layer {
            neurons,
            bias_neuron: with_bias_neuron.then(Neuron::bias),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    pub fn neuron(&self, index: usize) -> Option<&Neuron> {
        self.neurons.get(index)
    }

    pub(crate) fn neuron_mut(&mut self, index: usize) -> Option<&mut Neuron> {
        self.neurons.get_mut(index)
    }

    pub fn bias_neuron(&self) -> Option<&Neuron> {
        self.bias_neuron.as_ref()
    }

    /// Output of the bias neuron, or 0 on the output layer which has none.
    pub fn bias_output(&self) -> f64 {
        self.bias_neuron.as_ref().map_or(0.0, Neuron::output)
    }

    pub fn outputs(&self) -> impl Iterator<Item = f64> + '_ {
        self.neurons.iter().map(Neuron::output)
    }

    pub(crate) fn commit(&mut self) {
        for neuron in &mut self.neurons {
            neuron.commit();
        }
    }
}
