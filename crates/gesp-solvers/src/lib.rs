//! gesp-solvers - Reference solutions for GESP exam-practice judge problems
//!
//! This crate provides:
//! - Reusable algorithmic building blocks (binary search on answer, prefix
//!   sums, sieves, factorization, competition ranking)
//! - One self-contained solver per supported judge problem
//! - A batch runner that checks solvers against `.in`/`.ans` case files

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::registry::{Problem, find_problem, problems};
pub use app::runner::{CaseVerdict, JudgeSummary, judge_directory};
pub use app::{SolveError, solve};
pub use domain::bsearch::{max_feasible, min_feasible};
pub use domain::prefix::{PrefixGrid, PrefixSums};
pub use infra::scanner::{ScanError, Scanner};
