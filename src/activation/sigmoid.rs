use std::f64::consts::E;

/// Logistic activation used by every weighted neuron.
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`, always in the open interval (0, 1) for finite `x`.
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// Derivative expressed through the activation's own output `s = σ(x)`:
    /// `σ'(x) = s * (1 - s)`.
    pub fn derivative(output: f64) -> f64 {
        output * (1.0 - output)
    }
}
