use approx::assert_abs_diff_eq;
use scalargrad_core::autograd::{topological_sort, Evaluator};
use scalargrad_core::{Graph, NodeId, ScalarGradError};
use std::collections::HashMap;

mod common;

#[test]
fn forward_pass_of_sum_times_input() -> Result<(), ScalarGradError> {
    common::init_logger();
    let mut g = Graph::new();
    let a = g.input(2.0);
    let b = g.input(3.0);
    let c = g.input(5.0);
    let ab = g.add(a, b)?;
    let structure = g.mul(ab, c)?;

    let mut evaluator = Evaluator::new(&mut g, structure)?;
    let loss = evaluator.recompute_value();
    assert_eq!(evaluator.value(loss)?, 25.0);
    Ok(())
}

#[test]
fn gradients_of_single_tanh_neuron() -> Result<(), ScalarGradError> {
    common::init_logger();
    let mut g = Graph::new();
    let x1 = g.input(2.0);
    let w1 = g.parameter(-3.0);
    let x2 = g.input(0.0);
    let w2 = g.parameter(1.0);
    let b = g.parameter(6.881373587019543);

    let w1x1 = g.mul(w1, x1)?;
    let w2x2 = g.mul(w2, x2)?;
    let sum = g.add(w1x1, w2x2)?;
    let n = g.add(sum, b)?;
    let loss = g.tanh(n)?;

    let mut evaluator = Evaluator::new(&mut g, loss)?;
    evaluator.recompute_value();
    evaluator.recompute_gradients();

    assert_abs_diff_eq!(evaluator.value(loss)?, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-10);
    assert_abs_diff_eq!(evaluator.gradient(w1)?, 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(evaluator.gradient(w2)?, 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(evaluator.gradient(x1)?, -1.5, epsilon = 1e-10);
    assert_abs_diff_eq!(evaluator.gradient(x2)?, 0.5, epsilon = 1e-10);
    assert_abs_diff_eq!(evaluator.gradient(b)?, 0.5, epsilon = 1e-10);
    Ok(())
}

#[test]
fn training_graph_order_is_topologically_sound() -> Result<(), ScalarGradError> {
    let training = common::build_training_graph(3)?;
    let g = &training.graph;
    let order = topological_sort(g, training.loss)?;
    let position: HashMap<NodeId, usize> =
        order.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    assert_eq!(position.len(), order.len());
    assert_eq!(order.last(), Some(&training.loss));
    for &id in &order {
        for operand in g.operands(id)? {
            assert!(position[&operand] < position[&id]);
        }
    }
    // Nothing in this graph is unreachable from the loss.
    assert_eq!(order.len(), g.len());
    Ok(())
}

#[test]
fn repeated_passes_are_deterministic() -> Result<(), ScalarGradError> {
    let mut training = common::build_training_graph(8)?;
    let predictions = training.predictions.clone();
    let mut evaluator = Evaluator::new(&mut training.graph, training.loss)?;

    evaluator.recompute_value();
    evaluator.recompute_gradients();
    let values: Vec<f64> = predictions.iter().map(|&p| evaluator.value(p)).collect::<Result<_, _>>()?;
    let grads: Vec<f64> = evaluator
        .parameters()
        .iter()
        .map(|&p| evaluator.gradient(p))
        .collect::<Result<_, _>>()?;

    evaluator.recompute_value();
    evaluator.recompute_gradients();
    evaluator.recompute_gradients();
    let values_again: Vec<f64> = predictions.iter().map(|&p| evaluator.value(p)).collect::<Result<_, _>>()?;
    let grads_again: Vec<f64> = evaluator
        .parameters()
        .iter()
        .map(|&p| evaluator.gradient(p))
        .collect::<Result<_, _>>()?;

    assert_eq!(values, values_again);
    assert_eq!(grads, grads_again);
    Ok(())
}
