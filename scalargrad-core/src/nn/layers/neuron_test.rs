#[cfg(test)]
mod tests {
    use crate::autograd::Evaluator;
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::nn::init::WeightInit;
    use crate::nn::layers::neuron::Neuron;
    use crate::node::NodeKind;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_creates_parameters() -> Result<(), ScalarGradError> {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let neuron = Neuron::new(&mut g, 3, WeightInit::default(), &mut rng)?;
        assert_eq!(neuron.weights().len(), 3);
        assert_eq!(neuron.parameters().len(), 4);
        assert_eq!(neuron.parameters().last(), Some(&neuron.bias()));
        for id in neuron.parameters() {
            assert_eq!(g.kind(id)?, NodeKind::Parameter);
            let v = g.value(id)?;
            assert!((-1.0..1.0).contains(&v));
        }
        Ok(())
    }

    #[test]
    fn test_neuron_connect_computes_weighted_sum() -> Result<(), ScalarGradError> {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(2);
        // Zero spread: every weight and the bias start at 0.5.
        let init = WeightInit::Normal {
            mean: 0.5,
            std_dev: 0.0,
        };
        let neuron = Neuron::new(&mut g, 2, init, &mut rng)?;
        let x0 = g.input(2.0);
        let x1 = g.input(-4.0);
        let out = neuron.connect(&mut g, &[x0, x1])?;

        let mut ev = Evaluator::new(&mut g, out)?;
        ev.recompute_value();
        ev.recompute_gradients();
        // 0.5*2 + 0.5*(-4) + 0.5
        assert_abs_diff_eq!(ev.value(out)?, -0.5, epsilon = 1e-12);
        assert_eq!(ev.gradient(neuron.weights()[0])?, 2.0);
        assert_eq!(ev.gradient(neuron.weights()[1])?, -4.0);
        assert_eq!(ev.gradient(neuron.bias())?, 1.0);
        assert_eq!(ev.parameters(), neuron.parameters().as_slice());
        Ok(())
    }

    #[test]
    fn test_neuron_dimension_mismatch() -> Result<(), ScalarGradError> {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        let neuron = Neuron::new(&mut g, 3, WeightInit::default(), &mut rng)?;
        let x = g.input(1.0);
        let before = g.len();
        assert_eq!(
            neuron.connect(&mut g, &[x, x]),
            Err(ScalarGradError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(g.len(), before);
        Ok(())
    }

    #[test]
    fn test_neuron_without_inputs_is_rejected() {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            Neuron::new(&mut g, 0, WeightInit::default(), &mut rng),
            Err(ScalarGradError::InvalidArchitecture(_))
        ));
    }
}
