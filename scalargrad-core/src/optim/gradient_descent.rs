use crate::autograd::Evaluator;
use crate::error::ScalarGradError;

/// Plain gradient descent: `value += learning_rate * gradient` on every
/// Parameter, repeated for a fixed number of iterations.
///
/// The learning rate is applied as given, so it must be negative to descend.
/// No momentum, clipping or per-parameter rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    pub learning_rate: f64,
    pub iterations: usize,
}

impl Default for GradientDescent {
    fn default() -> Self {
        GradientDescent {
            learning_rate: -0.1,
            iterations: 100,
        }
    }
}

impl GradientDescent {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        GradientDescent {
            learning_rate,
            iterations,
        }
    }

    /// One improvement step on values that are already current: backward pass,
    /// parameter update, forward pass. Returns the new terminal value.
    pub fn step(&self, evaluator: &mut Evaluator<'_>) -> Result<f64, ScalarGradError> {
        evaluator.recompute_gradients();
        evaluator.update_parameter_values(self.learning_rate);
        let terminal = evaluator.recompute_value();
        evaluator.value(terminal)
    }

    /// Runs an initial forward pass followed by `iterations` steps.
    ///
    /// Returns the terminal value after the initial pass and after every step,
    /// i.e. `iterations + 1` entries.
    pub fn run(&self, evaluator: &mut Evaluator<'_>) -> Result<Vec<f64>, ScalarGradError> {
        let terminal = evaluator.recompute_value();
        let initial = evaluator.value(terminal)?;
        log::info!(
            "GradientDescent: starting at loss {} (lr = {}, iterations = {}, parameters = {})",
            initial,
            self.learning_rate,
            self.iterations,
            evaluator.parameters().len()
        );

        let mut history = Vec::with_capacity(self.iterations + 1);
        history.push(initial);
        for iteration in 0..self.iterations {
            let loss = self.step(evaluator)?;
            log::debug!("GradientDescent: iteration {} loss {}", iteration + 1, loss);
            history.push(loss);
        }

        log::info!(
            "GradientDescent: finished at loss {}",
            history.last().copied().unwrap_or(initial)
        );
        Ok(history)
    }
}

#[cfg(test)]
#[path = "gradient_descent_test.rs"]
mod tests;
