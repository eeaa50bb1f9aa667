use crate::autograd::evaluator::Evaluator;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for node {node}: analytical grad {analytical:?} != numerical grad {numerical:?}")]
    GradientMismatch {
        node: NodeId,
        analytical: f64,
        numerical: f64,
    },

    #[error("Numerical gradient is NaN or infinite for node {node}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        node: NodeId,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] ScalarGradError),
}

/// Tolerances for [`check_gradients`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Finite-difference step `h`.
    pub step: f64,
    /// Absolute tolerance, used when both gradients are near zero.
    pub epsilon: f64,
    /// Relative tolerance.
    pub max_relative: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            step: 1e-6,
            epsilon: 1e-6,
            max_relative: 1e-5,
        }
    }
}

/// Checks the analytical gradient of `terminal` against central differences
/// `(f(x + h) - f(x - h)) / 2h` for every leaf it reaches.
///
/// Leaf values are restored afterwards, and the graph is left with fresh values
/// and gradients.
pub fn check_gradients(
    graph: &mut Graph,
    terminal: NodeId,
    config: GradCheckConfig,
) -> Result<(), GradCheckError> {
    let mut evaluator = Evaluator::new(graph, terminal)?;

    // --- 1. Analytical gradients ---
    evaluator.recompute_value();
    evaluator.recompute_gradients();

    let mut leaves: Vec<(NodeId, f64, f64)> = Vec::new();
    for &id in evaluator.forward_order() {
        let node = evaluator.graph().node(id)?;
        if node.kind().is_leaf() {
            leaves.push((id, node.value(), node.gradient()));
        }
    }

    // --- 2. Numerical gradients, one leaf at a time ---
    let h = config.step;
    let mut outcome = Ok(());
    for &(id, original, analytical) in &leaves {
        evaluator.set_leaf_value(id, original + h)?;
        evaluator.recompute_value();
        let loss_plus = evaluator.value(terminal)?;
        evaluator.set_leaf_value(id, original - h)?;
        evaluator.recompute_value();
        let loss_minus = evaluator.value(terminal)?;
        evaluator.set_leaf_value(id, original)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * h);
        log::trace!(
            "grad_check: node {} analytical {} numerical {}",
            id,
            analytical,
            numerical
        );

        if !numerical.is_finite() {
            outcome = Err(GradCheckError::NumericalGradNaNOrInfinite {
                node: id,
                loss_plus,
                loss_minus,
            });
            break;
        }
        let close = approx::relative_eq!(
            analytical,
            numerical,
            epsilon = config.epsilon,
            max_relative = config.max_relative
        );
        if !close {
            outcome = Err(GradCheckError::GradientMismatch {
                node: id,
                analytical,
                numerical,
            });
            break;
        }
    }

    // --- 3. Leave the graph as the analytical pass found it ---
    evaluator.recompute_value();
    evaluator.recompute_gradients();
    outcome
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
