//! # Computation graph arena
//!
//! A [`Graph`] owns every node of a computation in one append-only vector.
//! Nodes refer to their operands by [`NodeId`], so a node can be shared by any
//! number of consumers (fan-out) without ownership cycles.
//!
//! Because a combinator only accepts operands that already live in the arena,
//! every operand index is strictly smaller than the index of its consumer. The
//! operand relation is therefore acyclic by construction.
//!
//! Leaf constructors live here. The operation combinators (`add`, `mul`,
//! `tanh`, ...) are defined next to their math in [`crate::ops`].

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, NodeKind};
use crate::ops::numeric;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(0);

/// Arena of scalar nodes.
///
/// Every graph gets its own tag, stamped into the [`NodeId`]s it issues. A clone
/// keeps the tag, so handles of the original stay valid on the copy.
#[derive(Debug, Clone)]
pub struct Graph {
    tag: u32,
    nodes: Vec<Node>,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    /// Number of nodes held by the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // --- Leaf constructors ---

    /// Creates an `Input` leaf holding a fixed external datum.
    pub fn input(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(NodeKind::Input, value))
    }

    /// Creates an `Expectation` leaf, i.e. a fixed training label.
    pub fn expectation(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(NodeKind::Expectation, value))
    }

    /// Creates a trainable `Parameter` leaf.
    pub fn parameter(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(NodeKind::Parameter, value))
    }

    // --- Accessors ---

    /// Returns the node behind `id`, or `UnknownNode` if the handle was issued
    /// by another graph.
    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        let unknown = ScalarGradError::UnknownNode {
            id,
            len: self.nodes.len(),
        };
        if id.graph != self.tag {
            return Err(unknown);
        }
        self.nodes.get(id.index).ok_or(unknown)
    }

    /// Last forward value of `id`.
    ///
    /// The engine does not check freshness: call
    /// [`Evaluator::recompute_value`](crate::autograd::Evaluator::recompute_value)
    /// before reading values of operation nodes.
    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.node(id).map(Node::value)
    }

    /// Gradient of the last backward pass at `id`.
    pub fn gradient(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.node(id).map(Node::gradient)
    }

    pub fn kind(&self, id: NodeId) -> Result<NodeKind, ScalarGradError> {
        self.node(id).map(|n| n.kind)
    }

    /// Ordered operand handles of `id` (empty for leaves).
    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.node(id).map(|n| n.kind.operands())
    }

    /// Iterates over every handle in the arena, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let tag = self.tag;
        (0..self.nodes.len()).map(move |index| NodeId { graph: tag, index })
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<NodeId, ScalarGradError> {
        self.node(id).map(|_| id)
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId {
            graph: self.tag,
            index: self.nodes.len(),
        };
        self.nodes.push(node);
        id
    }

    // --- Engine-internal mutation ---
    // Callers hold ids already validated by `Evaluator::new` or `check`.

    pub(crate) fn set_value(&mut self, id: NodeId, value: f64) {
        self.nodes[id.index].value = value;
    }

    pub(crate) fn set_gradient(&mut self, id: NodeId, gradient: f64) {
        self.nodes[id.index].gradient = gradient;
    }

    /// `value += learning_rate * gradient` for one node.
    pub(crate) fn step_parameter(&mut self, id: NodeId, learning_rate: f64) {
        let node = &mut self.nodes[id.index];
        node.value += learning_rate * node.gradient;
    }

    fn add_gradient(&mut self, id: NodeId, contribution: f64) {
        self.nodes[id.index].gradient += contribution;
    }

    fn value_of(&self, id: NodeId) -> f64 {
        self.nodes[id.index].value
    }

    /// Recomputes the value of `id` from its operands' current values.
    ///
    /// Operand values must already be fresh; this is guaranteed by running the
    /// nodes in topological order and is not re-checked here. Leaves are no-ops.
    pub(crate) fn recompute_value(&mut self, id: NodeId) {
        let kind = self.nodes[id.index].kind;
        let value = match kind {
            NodeKind::Input | NodeKind::Expectation | NodeKind::Parameter => return,
            NodeKind::Addition(l, r) => self.value_of(l) + self.value_of(r),
            NodeKind::Subtraction(l, r) => self.value_of(l) - self.value_of(r),
            NodeKind::Multiplication(l, r) => self.value_of(l) * self.value_of(r),
            NodeKind::Negation(x) => -self.value_of(x),
            NodeKind::Power(x, k) => numeric::pow(self.value_of(x), k),
            NodeKind::RectifiedLinearUnit(x) => self.value_of(x).max(0.0),
            NodeKind::Tanh(x) => numeric::tanh(self.value_of(x)),
        };
        self.nodes[id.index].value = value;
    }

    /// Adds this node's contribution onto the gradients of its operands.
    ///
    /// The node's own gradient must already hold the sum over all of its
    /// consumers, which reverse topological order guarantees. Leaves are no-ops.
    pub(crate) fn backpropagate_gradient(&mut self, id: NodeId) {
        let Node {
            kind,
            value: out,
            gradient: g,
        } = self.nodes[id.index];
        match kind {
            NodeKind::Input | NodeKind::Expectation | NodeKind::Parameter => {}
            NodeKind::Addition(l, r) => {
                self.add_gradient(l, g);
                self.add_gradient(r, g);
            }
            NodeKind::Subtraction(l, r) => {
                self.add_gradient(l, g);
                self.add_gradient(r, -g);
            }
            NodeKind::Multiplication(l, r) => {
                let (lv, rv) = (self.value_of(l), self.value_of(r));
                self.add_gradient(l, rv * g);
                self.add_gradient(r, lv * g);
            }
            NodeKind::Negation(x) => self.add_gradient(x, -g),
            NodeKind::Power(x, k) => {
                let local = k * numeric::pow(self.value_of(x), k - 1.0);
                self.add_gradient(x, local * g);
            }
            // The gate is the activation's own output, not a 0/1 mask.
            NodeKind::RectifiedLinearUnit(x) => self.add_gradient(x, out * g),
            NodeKind::Tanh(x) => self.add_gradient(x, (1.0 - out * out) * g),
        }
    }
}
