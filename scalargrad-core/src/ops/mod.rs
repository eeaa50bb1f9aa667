//! # Graph Operations Module (`ops`)
//!
//! This module defines the combinators that grow a [`Graph`] with operation
//! nodes, plus the shared numeric helpers those nodes evaluate with.
//!
//! ## Structure:
//!
//! - **Combinators:** Every operation is a method on [`Graph`] (e.g. `graph.add(a, b)`).
//!   A combinator only validates its operand handles and appends a new node that
//!   references them. It performs no evaluation; values appear on the next
//!   forward pass of an [`Evaluator`](crate::autograd::Evaluator).
//! - **Rules:** The value and gradient rules of each variant live in
//!   `Graph::recompute_value` / `Graph::backpropagate_gradient` in
//!   [`crate::graph`], dispatched by `match` over [`NodeKind`].
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, neg, pow, and `sum` over a slice.
//! - [`activation`]: relu, tanh.
//! - [`numeric`]: `pow` and overflow-safe `tanh` shared by forward and backward rules.

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, NodeKind};

pub mod activation;
pub mod arithmetic;
pub mod numeric;

/// Validates both operands, then appends the binary node built by `make`.
pub(crate) fn apply_binary_op<F>(
    graph: &mut Graph,
    left: NodeId,
    right: NodeId,
    make: F,
) -> Result<NodeId, ScalarGradError>
where
    F: FnOnce(NodeId, NodeId) -> NodeKind,
{
    let left = graph.check(left)?;
    let right = graph.check(right)?;
    Ok(graph.push(Node::operation(make(left, right))))
}

/// Validates the operand, then appends the unary node built by `make`.
pub(crate) fn apply_unary_op<F>(
    graph: &mut Graph,
    operand: NodeId,
    make: F,
) -> Result<NodeId, ScalarGradError>
where
    F: FnOnce(NodeId) -> NodeKind,
{
    let operand = graph.check(operand)?;
    Ok(graph.push(Node::operation(make(operand))))
}
