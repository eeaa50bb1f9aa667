// scalargrad-core/src/optim/mod.rs

//! Training loops built on the three independent [`Evaluator`](crate::autograd::Evaluator)
//! phases: forward pass, backward pass and parameter update.

pub mod gradient_descent;

pub use gradient_descent::GradientDescent;
