use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::WeightInit;
use crate::node::NodeId;
use rand::Rng;

/// A single neuron: `sum(w_i * x_i) + b` over Parameter weights and bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates `input_count` weight Parameters followed by one bias Parameter,
    /// each drawn from `init`.
    pub fn new<R: Rng>(
        graph: &mut Graph,
        input_count: usize,
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if input_count == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let mut weights = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            weights.push(graph.parameter(init.sample(rng)?));
        }
        let bias = graph.parameter(init.sample(rng)?);
        Ok(Neuron { weights, bias })
    }

    /// Builds `((w_0 * x_0 + w_1 * x_1) + ...) + b`.
    ///
    /// # Errors
    /// `DimensionMismatch { expected: weights, actual: inputs }` if the counts differ.
    pub fn connect(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        if self.weights.len() != inputs.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let products = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(&w, &x)| graph.mul(w, x))
            .collect::<Result<Vec<_>, _>>()?;
        let weighted = graph.sum(&products)?;
        graph.add(weighted, self.bias)
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Weights in input order, then the bias.
    pub fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
