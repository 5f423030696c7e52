use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loss::SquaredErrorLoss;

/// One input vector paired with the output the network should produce for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub data: Vec<f64>,
    pub expected_output: Vec<f64>,
}

impl Sample {
    pub fn new(data: Vec<f64>, expected_output: Vec<f64>) -> Sample {
        Sample { data, expected_output }
    }
}

/// What the network produced for a sample, with the resulting error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    output: Vec<f64>,
    expected: Vec<f64>,
    error: f64,
}

impl Prediction {
    /// Computes the half-sum-of-squares error between `output` and `expected`.
    pub fn new(output: Vec<f64>, expected: Vec<f64>) -> Prediction {
        let error = SquaredErrorLoss::loss(&output, &expected);
        Prediction { output, expected, error }
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn expected(&self) -> &[f64] {
        &self.expected
    }

    pub fn error(&self) -> f64 {
        self.error
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted: {:?}, Expected: {:?}, error={}",
            self.output, self.expected, self.error
        )
    }
}
