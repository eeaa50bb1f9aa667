#[cfg(test)]
mod tests {
    use crate::autograd::Evaluator;
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::nn::losses::squared_error::{Reduction, SquaredErrorLoss};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sum_reduction() -> Result<(), ScalarGradError> {
        let mut g = Graph::new();
        let p0 = g.parameter(0.5);
        let p1 = g.parameter(-0.25);
        let t0 = g.expectation(1.0);
        let t1 = g.expectation(-1.0);
        let loss = SquaredErrorLoss::default().build(&mut g, &[p0, p1], &[t0, t1])?;

        let mut ev = Evaluator::new(&mut g, loss)?;
        ev.recompute_value();
        ev.recompute_gradients();
        // 0.5^2 + 0.75^2
        assert_eq!(ev.value(loss)?, 0.8125);
        // d/dp (t - p)^2 = -2 (t - p)
        assert_eq!(ev.gradient(p0)?, -1.0);
        assert_eq!(ev.gradient(p1)?, 1.5);
        Ok(())
    }

    #[test]
    fn test_mean_reduction() -> Result<(), ScalarGradError> {
        let mut g = Graph::new();
        let p0 = g.parameter(0.5);
        let p1 = g.parameter(-0.25);
        let t0 = g.expectation(1.0);
        let t1 = g.expectation(-1.0);
        let loss = SquaredErrorLoss::new(Reduction::Mean).build(&mut g, &[p0, p1], &[t0, t1])?;

        let mut ev = Evaluator::new(&mut g, loss)?;
        ev.recompute_value();
        ev.recompute_gradients();
        assert_abs_diff_eq!(ev.value(loss)?, 0.40625, epsilon = 1e-15);
        assert_abs_diff_eq!(ev.gradient(p0)?, -0.5, epsilon = 1e-15);
        // The 1/n scale is an Input leaf, never a trainable parameter.
        assert_eq!(ev.parameters(), &[p0, p1]);
        Ok(())
    }

    #[test]
    fn test_length_mismatch_and_empty() {
        let mut g = Graph::new();
        let p = g.parameter(0.0);
        let loss = SquaredErrorLoss::default();
        assert_eq!(
            loss.build(&mut g, &[p], &[]),
            Err(ScalarGradError::DimensionMismatch {
                expected: 1,
                actual: 0
            })
        );
        assert_eq!(loss.build(&mut g, &[], &[]), Err(ScalarGradError::EmptySum));
    }
}
