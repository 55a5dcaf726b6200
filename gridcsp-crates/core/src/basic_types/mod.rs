mod model_error;
mod propagation_status;
mod solution;

pub use model_error::ModelError;
pub use propagation_status::*;
pub use solution::Solution;
