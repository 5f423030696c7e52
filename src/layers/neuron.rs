/// Live and staged weights of a weighted neuron.
///
/// The staged buffers are separate allocations from the live ones; backprop
/// writes only to the staged side and `commit` copies it over in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Synapses {
    bias_weight: f64,
    weights: Vec<f64>,
    staged_bias_weight: f64,
    staged_weights: Vec<f64>,
}

impl Synapses {
    fn new(bias_weight: f64, weights: Vec<f64>) -> Synapses {
        let staged_weights = weights.clone();
        Synapses {
            bias_weight,
            weights,
            staged_bias_weight: bias_weight,
            staged_weights,
        }
    }
}

/// A single unit of a layer.
///
/// Input neurons and bias neurons carry no synapses; every other neuron owns
/// one bias weight plus one weight per non-bias neuron of the previous layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    output: f64,
    gradient: f64,
    synapses: Option<Synapses>,
}

impl Neuron {
    /// Input-layer neuron: its output is assigned straight from the sample.
    pub fn input() -> Neuron {
        Neuron { output: 0.0, gradient: 0.0, synapses: None }
    }

    /// Constant-output pseudo-neuron feeding the next layer's bias weights.
    pub fn bias() -> Neuron {
        Neuron { output: 1.0, gradient: 0.0, synapses: None }
    }

    pub fn weighted(bias_weight: f64, weights: Vec<f64>) -> Neuron {
        Neuron {
            output: 0.0,
            gradient: 0.0,
            synapses: Some(Synapses::new(bias_weight, weights)),
        }
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub(crate) fn set_output(&mut self, output: f64) {
        self.output = output;
    }

    /// Local error term from the most recent backward pass.
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub(crate) fn set_gradient(&mut self, gradient: f64) {
        self.gradient = gradient;
    }

    pub fn is_weighted(&self) -> bool {
        self.synapses.is_some()
    }

    pub fn bias_weight(&self) -> Option<f64> {
        self.synapses.as_ref().map(|s| s.bias_weight)
    }

    /// Input weights, indexed by neuron position in the previous layer.
    /// Empty for input and bias neurons.
    pub fn weights(&self) -> &[f64] {
        self.synapses.as_ref().map(|s| s.weights.as_slice()).unwrap_or(&[])
    }

    pub fn weight_count(&self) -> usize {
        self.weights().len()
    }

    pub fn staged_bias_weight(&self) -> Option<f64> {
        self.synapses.as_ref().map(|s| s.staged_bias_weight)
    }

    pub fn staged_weights(&self) -> &[f64] {
        self.synapses.as_ref().map(|s| s.staged_weights.as_slice()).unwrap_or(&[])
    }

    /// Weighted sum of the previous layer's outputs plus the bias term.
    pub(crate) fn net_input(&self, bias_output: f64, previous_outputs: impl Iterator<Item = f64>) -> f64 {
        match &self.synapses {
            Some(s) => {
                bias_output * s.bias_weight
                    + s.weights.iter().zip(previous_outputs).map(|(w, o)| w * o).sum::<f64>()
            }
            None => 0.0,
        }
    }

    /// Writes the next bias weight and input weights into the staging buffer.
    /// `weight_for` maps (input index, live weight) to the staged value.
    pub(crate) fn stage<F>(&mut self, staged_bias_weight: f64, mut weight_for: F)
    where
        F: FnMut(usize, f64) -> f64,
    {
        if let Some(s) = self.synapses.as_mut() {
            s.staged_bias_weight = staged_bias_weight;
            for (k, (staged, &live)) in s.staged_weights.iter_mut().zip(s.weights.iter()).enumerate() {
                *staged = weight_for(k, live);
            }
        }
    }

    /// Copies the staged buffer onto the live weights.
    pub(crate) fn commit(&mut self) {
        if let Some(s) = self.synapses.as_mut() {
            s.bias_weight = s.staged_bias_weight;
            s.weights.copy_from_slice(&s.staged_weights);
        }
    }

    /// Overwrites live and staged weights alike. Length is checked by the caller.
    pub(crate) fn set_weights(&mut self, bias_weight: f64, weights: &[f64]) {
        if let Some(s) = self.synapses.as_mut() {
            s.bias_weight = bias_weight;
            s.staged_bias_weight = bias_weight;
            s.weights.copy_from_slice(weights);
            s.staged_weights.copy_from_slice(weights);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_neuron_emits_one_and_has_no_weights() {
        let n = Neuron::bias();
        assert_eq!(n.output(), 1.0);
        assert!(!n.is_weighted());
        assert!(n.weights().is_empty());
        assert_eq!(n.bias_weight(), None);
    }

    #[test]
    fn net_input_sums_bias_and_weighted_outputs() {
        let n = Neuron::weighted(0.5, vec![0.1, -0.2]);
        let net = n.net_input(1.0, [2.0, 3.0].into_iter());
        assert!((net - (0.5 + 0.2 - 0.6)).abs() < 1e-12);
    }

    #[test]
    fn staging_leaves_live_weights_untouched_until_commit() {
        let mut n = Neuron::weighted(0.5, vec![1.0, 2.0]);
        n.stage(0.4, |k, w| w - k as f64);

        assert_eq!(n.bias_weight(), Some(0.5));
        assert_eq!(n.weights(), &[1.0, 2.0]);
        assert_eq!(n.staged_bias_weight(), Some(0.4));
        assert_eq!(n.staged_weights(), &[1.0, 1.0]);

        n.commit();
        assert_eq!(n.bias_weight(), Some(0.4));
        assert_eq!(n.weights(), &[1.0, 1.0]);
    }

    #[test]
    fn set_weights_syncs_staging_buffer() {
        let mut n = Neuron::weighted(0.0, vec![0.0, 0.0]);
        n.set_weights(0.35, &[0.15, 0.2]);
        n.commit();
        assert_eq!(n.bias_weight(), Some(0.35));
        assert_eq!(n.weights(), &[0.15, 0.2]);
    }
}
