//! Contains the options which determine the shape of the search tree: which unassigned variable
//! the search branches on next ([`VariableSelection`]) and in which order the values of that
//! variable are tried ([`ValueSelection`]).
mod value_selection;
mod variable_selection;

pub use value_selection::ValueSelection;
pub use variable_selection::VariableSelection;
