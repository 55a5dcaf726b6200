use std::fmt::Display;

use gridcsp_solver::ModelError;
use thiserror::Error;

use crate::futoshiki::FutoshikiParseError;

pub(crate) type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub(crate) enum SolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} is not supported.")]
    InvalidInstanceFile(String),
    #[error("The futoshiki board was invalid, more details: {0}")]
    InvalidBoard(#[from] FutoshikiParseError),
    #[error("Failed to build the model, more details: {0}")]
    Model(#[from] ModelError),
}

impl SolverError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}
