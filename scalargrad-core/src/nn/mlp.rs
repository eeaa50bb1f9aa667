use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::WeightInit;
use crate::nn::layers::dense::Dense;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// A multi-layer perceptron of [`Dense`] layers.
///
/// Every layer except the last is followed by `tanh`; the last layer's outputs
/// are returned raw, so the caller picks the output activation (or none).
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLayerPerceptron {
    layers: Vec<Dense>,
    input_count: usize,
}

impl MultiLayerPerceptron {
    /// Builds one layer per entry of `layer_sizes`, the first taking
    /// `input_count` inputs and each following one taking the previous layer's
    /// outputs.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `layer_sizes` is empty or any size (including
    /// `input_count`) is zero; `InvalidInitialization` for a bad `init`.
    pub fn new<R: Rng>(
        graph: &mut Graph,
        input_count: usize,
        layer_sizes: &[usize],
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "at least one layer is required".to_string(),
            ));
        }
        let sizes: Vec<usize> = std::iter::once(input_count)
            .chain(layer_sizes.iter().copied())
            .collect();
        if sizes.contains(&0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer sizes must be positive, got {:?}",
                sizes
            )));
        }
        init.validate()?;

        let layers = sizes
            .windows(2)
            .map(|pair| Dense::new(graph, pair[0], pair[1], init, rng))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "MultiLayerPerceptron: sizes {:?}, {} parameters",
            sizes,
            layers.iter().map(|l| l.parameters().len()).sum::<usize>()
        );
        Ok(MultiLayerPerceptron {
            layers,
            input_count,
        })
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }
}

impl Module for MultiLayerPerceptron {
    fn connect(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        if inputs.len() != self.input_count {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.input_count,
                actual: inputs.len(),
            });
        }
        let (last, hidden) = self
            .layers
            .split_last()
            .ok_or_else(|| ScalarGradError::InvalidArchitecture("network has no layers".to_string()))?;

        let mut current: Vec<NodeId> = inputs.to_vec();
        for layer in hidden {
            current = layer
                .connect(graph, &current)?
                .into_iter()
                .map(|out| graph.tanh(out))
                .collect::<Result<Vec<_>, _>>()?;
        }
        last.connect(graph, &current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn input_count(&self) -> usize {
        self.input_count
    }

    fn output_count(&self) -> usize {
        self.layers.last().map_or(0, |l| l.output_count())
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
