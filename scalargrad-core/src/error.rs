use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unknown node {id}: not issued by this graph ({len} nodes)")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Node {id:?} of kind {kind} cannot be rebound; only Input and Expectation leaves can")]
    NotRebindable { id: NodeId, kind: &'static str },

    #[error("Cannot sum an empty list of nodes")]
    EmptySum,

    #[error("Invalid network architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid weight initialization: {0}")]
    InvalidInitialization(String),
}
