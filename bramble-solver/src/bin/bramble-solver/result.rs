use std::fmt::Display;

use bramble_solver::SolverError;
use thiserror::Error;

pub(crate) type BrambleResult<T> = Result<T, BrambleError>;

#[derive(Error, Debug)]
pub(crate) enum BrambleError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("The solver rejected a call, more details: {0}")]
    Solver(#[from] SolverError),
    #[error("The model cannot be built: {0}")]
    InvalidModel(String),
    #[error("There is no model named '{0}'; expected one of queens, pigeonhole, knapsack, table.")]
    UnknownModel(String),
}

impl BrambleError {
    pub(crate) fn invalid_model(reason: impl Display) -> Self {
        Self::InvalidModel(format!("{reason}"))
    }
}
