mod variable;
mod variable_id;

pub use variable::Variable;
pub use variable_id::VariableId;
