use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::WeightInit;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// A fully connected layer: every neuron sees the same inputs.
///
/// Outputs are the raw weighted sums; activations are applied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    neurons: Vec<Neuron>,
    input_count: usize,
}

impl Dense {
    pub fn new<R: Rng>(
        graph: &mut Graph,
        input_count: usize,
        neuron_count: usize,
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..neuron_count)
            .map(|_| Neuron::new(graph, input_count, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dense {
            neurons,
            input_count,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Dense {
    fn connect(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.connect(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn input_count(&self) -> usize {
        self.input_count
    }

    fn output_count(&self) -> usize {
        self.neurons.len()
    }
}
