pub mod squared_error;

pub use squared_error::{Reduction, SquaredErrorLoss};
