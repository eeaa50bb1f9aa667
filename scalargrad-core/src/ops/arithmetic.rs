// scalargrad-core/src/ops/arithmetic.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, NodeKind};
use crate::ops::{apply_binary_op, apply_unary_op};

impl Graph {
    /// `left + right`. Gradient flows unchanged to both operands.
    pub fn add(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, ScalarGradError> {
        apply_binary_op(self, left, right, NodeKind::Addition)
    }

    /// `left - right`. The right operand receives the negated gradient.
    pub fn sub(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, ScalarGradError> {
        apply_binary_op(self, left, right, NodeKind::Subtraction)
    }

    /// `left * right`. Each operand's gradient is scaled by the other's value.
    pub fn mul(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, ScalarGradError> {
        apply_binary_op(self, left, right, NodeKind::Multiplication)
    }

    /// `-operand`.
    pub fn neg(&mut self, operand: NodeId) -> Result<NodeId, ScalarGradError> {
        apply_unary_op(self, operand, NodeKind::Negation)
    }

    /// `operand ^ exponent` for a constant exponent.
    pub fn pow(&mut self, operand: NodeId, exponent: f64) -> Result<NodeId, ScalarGradError> {
        apply_unary_op(self, operand, |x| NodeKind::Power(x, exponent))
    }

    /// Folds `terms` left to right with additions: `((t0 + t1) + t2) + ...`.
    ///
    /// A single term is returned as is, without creating a node.
    pub fn sum(&mut self, terms: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        let (first, rest) = terms.split_first().ok_or(ScalarGradError::EmptySum)?;
        let mut acc = self.check(*first)?;
        for &term in rest {
            acc = self.add(acc, term)?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
