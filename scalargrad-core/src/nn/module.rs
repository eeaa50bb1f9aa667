use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// The base trait for network building blocks (layers, networks).
///
/// A module owns Parameter leaves that already live in a [`Graph`]. Connecting
/// it appends the operation nodes that compute its outputs from `inputs`; the
/// same module can be connected many times (once per sample), and every
/// connection shares the same Parameters.
pub trait Module: std::fmt::Debug {
    /// Wires the module onto `inputs` and returns its output nodes.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from [`Module::input_count`].
    fn connect(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError>;

    /// All trainable Parameter leaves of the module, sub-modules included.
    fn parameters(&self) -> Vec<NodeId>;

    /// Number of inputs `connect` expects.
    fn input_count(&self) -> usize;

    /// Number of outputs `connect` returns.
    fn output_count(&self) -> usize;
}
