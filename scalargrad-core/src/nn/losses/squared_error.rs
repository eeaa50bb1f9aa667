// scalargrad-core/src/nn/losses/squared_error.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Specifies the reduction to apply over the per-sample squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

/// Squared-error loss: `sum((target_i - prediction_i)^2)`, optionally averaged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SquaredErrorLoss {
    pub reduction: Reduction,
}

impl SquaredErrorLoss {
    pub fn new(reduction: Reduction) -> Self {
        SquaredErrorLoss { reduction }
    }

    /// Appends the loss node over paired `predictions` and `targets`.
    ///
    /// Targets are usually `Expectation` leaves. With [`Reduction::Mean`] the sum
    /// is multiplied by a constant `Input` leaf holding `1/n`.
    ///
    /// # Errors
    /// `DimensionMismatch` if the slices differ in length, `EmptySum` if both are empty.
    pub fn build(
        &self,
        graph: &mut Graph,
        predictions: &[NodeId],
        targets: &[NodeId],
    ) -> Result<NodeId, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }
        let mut terms = Vec::with_capacity(predictions.len());
        for (&prediction, &target) in predictions.iter().zip(targets) {
            let error = graph.sub(target, prediction)?;
            terms.push(graph.pow(error, 2.0)?);
        }
        let total = graph.sum(&terms)?;
        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let scale = graph.input(1.0 / terms.len() as f64);
                graph.mul(total, scale)
            }
        }
    }
}

#[cfg(test)]
#[path = "squared_error_test.rs"]
mod tests;
