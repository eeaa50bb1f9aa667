use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Module, MultiLayerPerceptron, SquaredErrorLoss, WeightInit};
use scalargrad_core::{Graph, NodeId, ScalarGradError};

/// Four samples of three features with +1/-1 labels.
pub(crate) const SAMPLES: [([f64; 3], f64); 4] = [
    ([2.0, 3.0, -1.0], 1.0),
    ([3.0, -1.0, 0.5], -1.0),
    ([0.5, 1.0, 1.0], -1.0),
    ([1.0, 1.0, -1.0], 1.0),
];

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The graph of a 3-4-4-1 network connected to every sample, with a tanh on
/// the output and the summed squared error as terminal node.
#[allow(dead_code)]
pub(crate) struct TrainingGraph {
    pub graph: Graph,
    pub loss: NodeId,
    pub predictions: Vec<NodeId>,
    pub network: MultiLayerPerceptron,
}

#[allow(dead_code)]
pub(crate) fn build_training_graph(seed: u64) -> Result<TrainingGraph, ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let network = MultiLayerPerceptron::new(&mut graph, 3, &[4, 4, 1], WeightInit::default(), &mut rng)?;

    let mut predictions = Vec::with_capacity(SAMPLES.len());
    let mut targets = Vec::with_capacity(SAMPLES.len());
    for (features, label) in SAMPLES.iter() {
        let inputs: Vec<NodeId> = features.iter().map(|&v| graph.input(v)).collect();
        let raw = network.connect(&mut graph, &inputs)?;
        predictions.push(graph.tanh(raw[0])?);
        targets.push(graph.expectation(*label));
    }
    let loss = SquaredErrorLoss::default().build(&mut graph, &predictions, &targets)?;

    Ok(TrainingGraph {
        graph,
        loss,
        predictions,
        network,
    })
}
