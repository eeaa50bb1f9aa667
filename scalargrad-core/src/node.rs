use std::fmt;

/// Stable handle to a node stored in a [`Graph`](crate::graph::Graph).
///
/// The handle is the node's index in the arena, tagged with the arena that
/// issued it. Two handles are the same node exactly when both match; values are
/// never compared for identity. A handle is only accepted by its own graph (or
/// a clone of it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: u32,
    pub(crate) index: usize,
}

impl NodeId {
    /// Returns the arena index backing this handle.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// The closed set of node variants.
///
/// Leaves carry no operands. Operation variants store the handles of their
/// operands (left before right) plus any constant they need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Fixed external datum.
    Input,
    /// Fixed external datum used as a training label.
    Expectation,
    /// Trainable scalar, only changed by the optimizer step.
    Parameter,
    Addition(NodeId, NodeId),
    Subtraction(NodeId, NodeId),
    Multiplication(NodeId, NodeId),
    Negation(NodeId),
    /// Raises the operand to a constant exponent.
    Power(NodeId, f64),
    RectifiedLinearUnit(NodeId),
    Tanh(NodeId),
}

impl NodeKind {
    /// Returns the operands in order: empty for leaves, one or two otherwise.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            NodeKind::Input | NodeKind::Expectation | NodeKind::Parameter => Vec::new(),
            NodeKind::Addition(l, r)
            | NodeKind::Subtraction(l, r)
            | NodeKind::Multiplication(l, r) => vec![l, r],
            NodeKind::Negation(x)
            | NodeKind::Power(x, _)
            | NodeKind::RectifiedLinearUnit(x)
            | NodeKind::Tanh(x) => vec![x],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Input | NodeKind::Expectation | NodeKind::Parameter
        )
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, NodeKind::Parameter)
    }

    /// Short variant name, used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Input => "Input",
            NodeKind::Expectation => "Expectation",
            NodeKind::Parameter => "Parameter",
            NodeKind::Addition(..) => "Addition",
            NodeKind::Subtraction(..) => "Subtraction",
            NodeKind::Multiplication(..) => "Multiplication",
            NodeKind::Negation(..) => "Negation",
            NodeKind::Power(..) => "Power",
            NodeKind::RectifiedLinearUnit(..) => "RectifiedLinearUnit",
            NodeKind::Tanh(..) => "Tanh",
        }
    }
}

/// One arena entry: the immutable variant plus the two engine-managed scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    /// Last computed forward result. Stale until the next forward pass.
    pub(crate) value: f64,
    /// Accumulated d(terminal)/d(self). Only meaningful right after a backward pass.
    pub(crate) gradient: f64,
}

impl Node {
    pub(crate) fn leaf(kind: NodeKind, value: f64) -> Self {
        Node {
            kind,
            value,
            gradient: 0.0,
        }
    }

    pub(crate) fn operation(kind: NodeKind) -> Self {
        Node {
            kind,
            value: 0.0,
            gradient: 0.0,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn gradient(&self) -> f64 {
        self.gradient
    }
}
