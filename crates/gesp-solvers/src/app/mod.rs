//! Application layer - Problem solvers and the batch case runner
//!
//! This module coordinates domain and infrastructure layers: each solver
//! parses one fixed-shape input through the scanner, runs domain logic,
//! and writes its answer lines.

pub mod registry;
pub mod runner;
pub mod solvers;

use crate::infra::scanner::{ScanError, Scanner};
use std::io;
use thiserror::Error;

/// Errors surfaced while running a solver
#[derive(Debug, Error)]
pub enum SolveError {
    /// Malformed or exhausted input
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Output write failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Problem id not present in the registry
    #[error("unknown problem '{0}'")]
    UnknownProblem(String),
}

/// Run the solver registered under `id` on `input`, writing answers to `out`.
pub fn solve(id: &str, input: &str, out: &mut dyn io::Write) -> Result<(), SolveError> {
    let problem = registry::find_problem(id)
        .ok_or_else(|| SolveError::UnknownProblem(id.to_owned()))?;
    let mut scanner = Scanner::from_str(input);
    (problem.run)(&mut scanner, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_unknown_problem() {
        let mut out = Vec::new();
        let err = solve("no-such-problem", "", &mut out).unwrap_err();
        assert!(matches!(err, SolveError::UnknownProblem(_)));
    }

    #[test]
    fn test_solve_dispatches() {
        let mut out = Vec::new();
        solve("prime-count", "10\n", &mut out).unwrap();
        // Primes up to 10: 2, 3, 5, 7 -> 1 + 4
        assert_eq!(String::from_utf8(out).unwrap(), "5\n");
    }

    #[test]
    fn test_solve_propagates_scan_error() {
        let mut out = Vec::new();
        let err = solve("prime-count", "", &mut out).unwrap_err();
        assert!(matches!(err, SolveError::Scan(ScanError::Eof)));
    }
}
