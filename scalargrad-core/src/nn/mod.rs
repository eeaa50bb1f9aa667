// src/nn/mod.rs
// Building blocks that compose graph nodes into neurons, layers and networks.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;

// Re-export common items
pub use init::WeightInit;
pub use layers::{Dense, Neuron};
pub use losses::{Reduction, SquaredErrorLoss};
pub use mlp::MultiLayerPerceptron;
pub use module::Module;
