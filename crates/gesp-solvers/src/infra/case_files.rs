//! Test-case file discovery and loading
//!
//! A case directory holds `<name>.in` / `<name>.ans` pairs. Discovery keys
//! off the `.in` files; a missing `.ans` is reported by the runner as a
//! broken case rather than skipped silently.

use crate::constants::{CASE_ANSWER_EXT, CASE_INPUT_EXT};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One discovered input/answer pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseFiles {
    /// Case name (input file stem)
    pub name: String,
    pub input_path: PathBuf,
    pub answer_path: PathBuf,
}

impl CaseFiles {
    pub fn read_input(&self) -> io::Result<String> {
        fs::read_to_string(&self.input_path)
    }

    pub fn read_answer(&self) -> io::Result<String> {
        fs::read_to_string(&self.answer_path)
    }
}

/// Discover all case pairs in `dir`, sorted by case name.
pub fn collect_cases(dir: impl AsRef<Path>) -> io::Result<Vec<CaseFiles>> {
    let mut cases = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(CASE_INPUT_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        cases.push(CaseFiles {
            name: stem.to_owned(),
            answer_path: path.with_extension(CASE_ANSWER_EXT),
            input_path: path.clone(),
        });
    }

    cases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cases)
}

/// Compare solver output against an expected answer.
///
/// Lines are compared with trailing whitespace stripped; trailing blank
/// lines on either side are ignored. Judges treat these as equal.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    let norm = |s: &str| -> Vec<String> {
        let mut lines: Vec<String> = s.lines().map(|l| l.trim_end().to_owned()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    };
    norm(actual) == norm(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_collect_cases_sorted_pairs() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.in", "2\n");
        touch(tmp.path(), "b.ans", "4\n");
        touch(tmp.path(), "a.in", "1\n");
        touch(tmp.path(), "a.ans", "2\n");
        touch(tmp.path(), "notes.txt", "ignored");

        let cases = collect_cases(tmp.path()).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "a");
        assert_eq!(cases[1].name, "b");
        assert_eq!(cases[0].read_input().unwrap(), "1\n");
        assert_eq!(cases[1].read_answer().unwrap(), "4\n");
    }

    #[test]
    fn test_collect_cases_keeps_unanswered_input() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "orphan.in", "1\n");

        let cases = collect_cases(tmp.path()).unwrap();
        assert_eq!(cases.len(), 1);
        assert!(!cases[0].answer_path.exists());
    }

    #[test]
    fn test_collect_cases_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_cases(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_outputs_match_normalization() {
        assert!(outputs_match("5\n", "5"));
        assert!(outputs_match("5 \n6\n", "5\n6\n\n"));
        assert!(!outputs_match("5\n6\n", "5\n7\n"));
        assert!(!outputs_match("5\n", "5\n6\n"));
    }

    #[test]
    fn test_outputs_match_interior_blank_lines_significant() {
        assert!(!outputs_match("a\n\nb\n", "a\nb\n"));
    }
}
