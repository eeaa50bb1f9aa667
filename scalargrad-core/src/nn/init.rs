use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Source distribution for the initial value of every weight and bias Parameter.
///
/// The random generator is injected by the caller, so a seeded generator
/// (e.g. `StdRng::seed_from_u64`) gives reproducible networks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInit {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
}

impl Default for WeightInit {
    /// Uniform over `[-1.0, 1.0)`.
    fn default() -> Self {
        WeightInit::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl WeightInit {
    /// Checks the distribution parameters without drawing anything.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            WeightInit::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(ScalarGradError::InvalidInitialization(format!(
                        "uniform range [{}, {}) is empty or not finite",
                        low, high
                    )));
                }
            }
            WeightInit::Normal { mean, std_dev } => {
                if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(ScalarGradError::InvalidInitialization(format!(
                        "normal distribution with mean {} and std_dev {}",
                        mean, std_dev
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws one initial value from `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        self.validate()?;
        match *self {
            WeightInit::Uniform { low, high } => Ok(rng.gen_range(low..high)),
            WeightInit::Normal { mean, std_dev } => {
                let normal = Normal::new(mean, std_dev)
                    .map_err(|e| ScalarGradError::InvalidInitialization(e.to_string()))?;
                Ok(normal.sample(rng))
            }
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
