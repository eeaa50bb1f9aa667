// Declares the main modules of the crate
pub mod autograd;
pub mod graph;
pub mod node;
pub mod ops;

// Network building blocks and training loops on top of the engine
pub mod nn;
pub mod optim;

pub mod error;

// Re-export the core types so they are reachable as `scalargrad_core::Graph` etc.
pub use autograd::Evaluator;
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{Node, NodeId, NodeKind};
// Re-export traits required by public functions
pub use num_traits;
