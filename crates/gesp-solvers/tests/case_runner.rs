//! Judge round trip through an on-disk case directory.

use gesp_solvers::app::registry::find_problem;
use gesp_solvers::app::runner::judge_directory;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_case(dir: &Path, name: &str, input: &str, answer: &str) {
    fs::write(dir.join(format!("{}.in", name)), input).unwrap();
    fs::write(dir.join(format!("{}.ans", name)), answer).unwrap();
}

#[test]
fn test_mixed_verdicts_round_trip() {
    let tmp = TempDir::new().unwrap();
    write_case(tmp.path(), "a_ok", "12\n", "2^2 * 3\n");
    write_case(tmp.path(), "b_ok", "97\n", "97\n");
    write_case(tmp.path(), "c_wrong", "12\n", "2 * 2 * 3\n");

    let problem = find_problem("factorize").unwrap();
    let summary = judge_directory(problem, tmp.path()).unwrap();

    assert_eq!(summary.verdicts.len(), 3);
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.failed(), 1);

    // Verdicts come back in case-name order regardless of parallel execution
    let names: Vec<&str> = summary.verdicts.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["a_ok", "b_ok", "c_wrong"]);
    assert!(!summary.verdicts[2].passed);
}

#[test]
fn test_answers_compared_whitespace_insensitively() {
    let tmp = TempDir::new().unwrap();
    // Trailing spaces and a missing final newline must still pass
    write_case(tmp.path(), "loose", "10\n", "5  ");

    let problem = find_problem("prime-count").unwrap();
    let summary = judge_directory(problem, tmp.path()).unwrap();
    assert!(summary.all_passed());
}

#[test]
fn test_multi_line_answers() {
    let tmp = TempDir::new().unwrap();
    write_case(tmp.path(), "ranks", "3\n90 80 70\n80 90 70\n60 60 60\n", "1\n1\n3\n");

    let problem = find_problem("score-ranking").unwrap();
    let summary = judge_directory(problem, tmp.path()).unwrap();
    assert!(summary.all_passed(), "{:?}", summary.verdicts);
}

#[test]
fn test_many_cases_run_in_parallel() {
    let tmp = TempDir::new().unwrap();
    for i in 0..64 {
        let x = 7 + 2 * (i % 3); // 7, 9, 11
        // 7 and 11 are prime immediately; 9 walks 9 -> 8 -> 6 -> 2 in 4 steps
        let ans = match x {
            7 | 11 => "1",
            9 => "4",
            _ => unreachable!(),
        };
        write_case(
            tmp.path(),
            &format!("case{:02}", i),
            &format!("1\n{}\n", x),
            &format!("{}\n", ans),
        );
    }

    let problem = find_problem("prime-chase").unwrap();
    let summary = judge_directory(problem, tmp.path()).unwrap();
    assert_eq!(summary.verdicts.len(), 64);
    assert!(summary.all_passed(), "{:?}", summary.verdicts.iter().find(|v| !v.passed));
}
