// scalargrad-core/src/ops/activation.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, NodeKind};
use crate::ops::apply_unary_op;

impl Graph {
    /// Rectified linear unit: `max(operand, 0)`.
    ///
    /// On the backward pass the upstream gradient is scaled by the activation's
    /// own output value rather than by a 0/1 mask. Positive inputs therefore
    /// receive `output * g`, and non-positive inputs receive nothing.
    pub fn relu(&mut self, operand: NodeId) -> Result<NodeId, ScalarGradError> {
        apply_unary_op(self, operand, NodeKind::RectifiedLinearUnit)
    }

    /// Hyperbolic tangent. Backward uses `(1 - output^2) * g`.
    pub fn tanh(&mut self, operand: NodeId) -> Result<NodeId, ScalarGradError> {
        apply_unary_op(self, operand, NodeKind::Tanh)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
