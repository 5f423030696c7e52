use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::init::WeightInitConfig;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `input_weights` — weights per neuron, i.e. the neuron count of the
///                     previous layer; `0` for the input layer
/// - `neurons`       — number of neurons in this layer, bias neuron excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub input_weights: usize,
    pub neurons: usize,
}

impl LayerSpec {
    pub fn new(input_weights: usize, neurons: usize) -> LayerSpec {
        LayerSpec { input_weights, neurons }
    }
}

impl From<(usize, usize)> for LayerSpec {
    fn from((input_weights, neurons): (usize, usize)) -> Self {
        LayerSpec { input_weights, neurons }
    }
}

/// A serializable description of a network architecture plus the
/// initialization it should be built with.
///
/// Only the shape and the seed/range live here; trained weights are never
/// written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the file stem.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub init: WeightInitConfig,
}

impl NetworkSpec {
    pub fn new(name: impl Into<String>, layers: &[(usize, usize)]) -> NetworkSpec {
        NetworkSpec {
            name: name.into(),
            layers: layers.iter().copied().map(LayerSpec::from).collect(),
            init: WeightInitConfig::default(),
        }
    }

    pub fn with_init(mut self, init: WeightInitConfig) -> NetworkSpec {
        self.init = init;
        self
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
