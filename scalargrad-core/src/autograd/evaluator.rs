use crate::autograd::topology::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, NodeKind};

/// Drives the forward pass, the backward pass and the parameter update for the
/// subgraph reachable from one terminal node (usually the loss).
///
/// The topological order is computed once in [`Evaluator::new`]. The evaluator
/// holds the graph's mutable borrow for its whole lifetime, so the topology
/// cannot change under it; build a new evaluator after adding nodes.
///
/// # Reading values and gradients
///
/// The engine never recomputes anything lazily. Values are only current after
/// [`recompute_value`](Evaluator::recompute_value), and gradients only after
/// [`recompute_gradients`](Evaluator::recompute_gradients) has run on those
/// values. Reads are not refused when stale: [`is_value_current`](Evaluator::is_value_current)
/// and [`is_gradient_current`](Evaluator::is_gradient_current) report the state,
/// and debug builds log a warning on a stale read.
#[derive(Debug)]
pub struct Evaluator<'g> {
    graph: &'g mut Graph,
    terminal: NodeId,
    forward: Vec<NodeId>,
    backward: Vec<NodeId>,
    parameters: Vec<NodeId>,
    values_current: bool,
    gradients_current: bool,
}

impl<'g> Evaluator<'g> {
    /// Sorts the subgraph reachable from `terminal`.
    ///
    /// # Errors
    /// `UnknownNode` if `terminal` does not belong to `graph`.
    pub fn new(graph: &'g mut Graph, terminal: NodeId) -> Result<Self, ScalarGradError> {
        let forward = topological_sort(graph, terminal)?;
        let backward: Vec<NodeId> = forward.iter().rev().copied().collect();
        let parameters: Vec<NodeId> = forward
            .iter()
            .copied()
            .filter(|&id| graph.node(id).map_or(false, |n| n.kind().is_parameter()))
            .collect();

        log::debug!(
            "Evaluator: terminal {} reaches {} nodes, {} parameters",
            terminal,
            forward.len(),
            parameters.len()
        );

        Ok(Evaluator {
            graph,
            terminal,
            forward,
            backward,
            parameters,
            values_current: false,
            gradients_current: false,
        })
    }

    /// Recomputes every value in topological order and returns the terminal.
    ///
    /// Leaves precede all their consumers, so each node reads fresh operand values.
    pub fn recompute_value(&mut self) -> NodeId {
        for &id in &self.forward {
            self.graph.recompute_value(id);
        }
        self.values_current = true;
        self.gradients_current = false;
        log::trace!(
            "Evaluator: forward pass done, terminal value {}",
            self.graph.node(self.terminal).map_or(f64::NAN, |n| n.value())
        );
        self.terminal
    }

    /// Resets all gradients to zero, seeds the terminal with 1 and propagates
    /// in reverse topological order.
    ///
    /// A node only propagates after all of its consumers have added their
    /// contributions to it, so fan-out gradients are summed before use.
    /// Calling this twice in a row yields the same gradients both times.
    pub fn recompute_gradients(&mut self) {
        if !self.values_current {
            log::warn!("Evaluator: recompute_gradients called on stale values");
        }
        for &id in &self.backward {
            self.graph.set_gradient(id, 0.0);
        }
        self.graph.set_gradient(self.terminal, 1.0);
        for &id in &self.backward {
            self.graph.backpropagate_gradient(id);
        }
        self.gradients_current = true;
    }

    /// Applies `value += learning_rate * gradient` to every parameter.
    ///
    /// A negative rate descends the gradient, a positive one ascends it. After
    /// the update, both values and gradients are stale.
    pub fn update_parameter_values(&mut self, learning_rate: f64) {
        for &id in &self.parameters {
            self.graph.step_parameter(id, learning_rate);
        }
        self.values_current = false;
        self.gradients_current = false;
    }

    /// Replaces the value of an `Input` or `Expectation` leaf.
    ///
    /// This allows feeding a new sample through an existing graph without
    /// rebuilding it. The structure is untouched; values and gradients become stale.
    ///
    /// # Errors
    /// `UnknownNode` for a foreign handle, `NotRebindable` for parameters and
    /// operation nodes.
    pub fn rebind(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        match self.graph.kind(id)? {
            NodeKind::Input | NodeKind::Expectation => {
                self.graph.set_value(id, value);
                self.values_current = false;
                self.gradients_current = false;
                Ok(())
            }
            other => Err(ScalarGradError::NotRebindable {
                id,
                kind: other.name(),
            }),
        }
    }

    /// Overwrites any leaf value, parameters included. Used by the gradient checker.
    pub(crate) fn set_leaf_value(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        if self.graph.kind(id)?.is_leaf() {
            self.graph.set_value(id, value);
            self.values_current = false;
            self.gradients_current = false;
        }
        Ok(())
    }

    // --- Accessors ---

    pub fn terminal(&self) -> NodeId {
        self.terminal
    }

    /// Topological order, leaves to terminal.
    pub fn forward_order(&self) -> &[NodeId] {
        &self.forward
    }

    /// Exact reverse of [`forward_order`](Evaluator::forward_order).
    pub fn backward_order(&self) -> &[NodeId] {
        &self.backward
    }

    /// Parameter leaves in the order they were first discovered.
    pub fn parameters(&self) -> &[NodeId] {
        &self.parameters
    }

    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    pub fn is_value_current(&self) -> bool {
        self.values_current
    }

    pub fn is_gradient_current(&self) -> bool {
        self.gradients_current
    }

    /// Value of `id` as of the last forward pass (leaves: as constructed or rebound).
    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        let node = self.graph.node(id)?;
        if cfg!(debug_assertions) && !self.values_current && !node.kind().is_leaf() {
            log::warn!("Evaluator: reading stale value of node {}", id);
        }
        Ok(node.value())
    }

    /// Gradient of the terminal with respect to `id`, as of the last backward pass.
    pub fn gradient(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        let node = self.graph.node(id)?;
        if cfg!(debug_assertions) && !self.gradients_current {
            log::warn!("Evaluator: reading stale gradient of node {}", id);
        }
        Ok(node.gradient())
    }
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod tests;
