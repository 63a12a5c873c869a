use std::fmt::Display;

use thiserror::Error;

/// The public solving entry points, used to report illegal call sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveCall {
    Propagate,
    FindSolution,
    NextSolution,
    FindAllSolutions,
    FindOptimalSolution,
    Duplicate,
}

impl Display for SolveCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveCall::Propagate => write!(f, "propagate"),
            SolveCall::FindSolution => write!(f, "find_solution"),
            SolveCall::NextSolution => write!(f, "next_solution"),
            SolveCall::FindAllSolutions => write!(f, "find_all_solutions"),
            SolveCall::FindOptimalSolution => write!(f, "find_optimal_solution"),
            SolveCall::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// A usage error: the caller asked the solver for something it cannot do in its current state.
///
/// Unlike a [`crate::Contradiction`], these errors are never absorbed by the search; they abort
/// the offending call and leave the solver as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(
        "`{call}` cannot be called {}; call `reset` first",
        describe_previous(.previous)
    )]
    IllegalCallSequence {
        call: SolveCall,
        previous: Option<SolveCall>,
    },
    #[error("the propagator '{propagator}' does not support `{operation}`")]
    UnsupportedOperation {
        propagator: String,
        operation: &'static str,
    },
    #[error("the variable with index {0} does not belong to this solver")]
    UnknownVariable(usize),
}

fn describe_previous(previous: &Option<SolveCall>) -> String {
    match previous {
        Some(call) => format!("after `{call}`"),
        None => "before `find_solution`".to_owned(),
    }
}

/// Errors which can occur when adding a constraint to the solver.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("Adding the propagator failed because it is infeasible at the root")]
    InfeasiblePropagator,
    #[error("Adding constraint failed because the solver is in an infeasible state")]
    InfeasibleState,
    #[error("Constraints cannot be added while a search is in progress")]
    SearchInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_call_messages_name_both_calls() {
        let error = SolverError::IllegalCallSequence {
            call: SolveCall::FindSolution,
            previous: Some(SolveCall::FindAllSolutions),
        };

        assert_eq!(
            error.to_string(),
            "`find_solution` cannot be called after `find_all_solutions`; call `reset` first"
        );
    }

    #[test]
    fn next_solution_without_predecessor_is_described() {
        let error = SolverError::IllegalCallSequence {
            call: SolveCall::NextSolution,
            previous: None,
        };

        assert!(error.to_string().contains("before `find_solution`"));
    }
}
