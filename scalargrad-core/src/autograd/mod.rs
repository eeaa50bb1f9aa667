//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! [`topology`] orders the subgraph reachable from a terminal node,
//! [`Evaluator`] runs the forward pass, the backward pass and the parameter
//! update over that order, and [`grad_check`] compares the analytical
//! gradients with finite differences.

pub mod evaluator;
pub mod grad_check;
pub mod topology;

pub use evaluator::Evaluator;
pub use grad_check::{check_gradients, GradCheckConfig, GradCheckError};
pub use topology::topological_sort;
