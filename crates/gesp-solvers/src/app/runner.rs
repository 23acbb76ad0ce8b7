//! Batch case runner
//!
//! Runs one solver over every discovered `.in`/`.ans` pair in a directory
//! and reports per-case verdicts. Cases are independent, so they run in
//! parallel with rayon; each case gets its own scanner and output buffer.

use crate::app::registry::Problem;
use crate::infra::case_files::{CaseFiles, collect_cases, outputs_match};
use crate::infra::scanner::Scanner;
use rayon::prelude::*;
use std::io;
use std::path::Path;

/// Outcome of one case.
#[derive(Clone, Debug)]
pub struct CaseVerdict {
    pub name: String,
    pub passed: bool,
    /// Failure detail: solver error, missing file, or the mismatched output
    pub detail: Option<String>,
}

/// Aggregate over a case directory.
#[derive(Clone, Debug)]
pub struct JudgeSummary {
    pub verdicts: Vec<CaseVerdict>,
}

impl JudgeSummary {
    pub fn passed(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.verdicts.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run a single case against a problem's solver.
pub fn run_case(problem: &Problem, case: &CaseFiles) -> CaseVerdict {
    let fail = |detail: String| CaseVerdict {
        name: case.name.clone(),
        passed: false,
        detail: Some(detail),
    };

    let input = match case.read_input() {
        Ok(s) => s,
        Err(e) => return fail(format!("cannot read input: {}", e)),
    };
    let expected = match case.read_answer() {
        Ok(s) => s,
        Err(e) => return fail(format!("cannot read answer: {}", e)),
    };

    let mut output = Vec::new();
    let mut scanner = Scanner::from_str(&input);
    if let Err(e) = (problem.run)(&mut scanner, &mut output) {
        return fail(format!("solver error: {}", e));
    }

    let actual = String::from_utf8_lossy(&output);
    if outputs_match(&actual, &expected) {
        CaseVerdict {
            name: case.name.clone(),
            passed: true,
            detail: None,
        }
    } else {
        fail(format!(
            "wrong answer: expected '{}', got '{}'",
            expected.trim_end(),
            actual.trim_end()
        ))
    }
}

/// Judge every case in `dir`, in parallel. Verdicts keep case-name order.
pub fn judge_directory(problem: &Problem, dir: impl AsRef<Path>) -> io::Result<JudgeSummary> {
    let cases = collect_cases(dir)?;

    let verdicts: Vec<CaseVerdict> = cases
        .par_iter()
        .map(|case| run_case(problem, case))
        .collect();

    Ok(JudgeSummary { verdicts })
}
