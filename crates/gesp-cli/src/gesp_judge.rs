//! Batch judge CLI
//!
//! Usage: gesp_judge <problem-id> --case-dir <DIR>
//!
//! Runs a solver over every <name>.in / <name>.ans pair in DIR and prints
//! per-case verdicts plus a summary. Exit code is nonzero when any case
//! fails.

use gesp_solvers::app::registry::{find_problem, problems};
use gesp_solvers::app::runner::judge_directory;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    problem_id: String,
    case_dir: PathBuf,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <problem-id> --case-dir <DIR>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --case-dir <DIR>  Directory holding <name>.in / <name>.ans pairs");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    eprintln!("Problems:");
    for p in problems() {
        eprintln!("  {:<18} {}", p.id, p.summary);
    }
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut problem_id: Option<String> = None;
    let mut case_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--case-dir" => {
                i += 1;
                if i >= args.len() {
                    return Err("--case-dir requires a value".to_string());
                }
                case_dir = Some(PathBuf::from(&args[i]));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if problem_id.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                problem_id = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(Args {
        problem_id: problem_id.ok_or("Missing problem id")?,
        case_dir: case_dir.ok_or("Missing --case-dir")?,
    })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let problem = match find_problem(&args.problem_id) {
        Some(p) => p,
        None => {
            eprintln!("Error: unknown problem '{}'.", args.problem_id);
            eprintln!("Run with --help to list supported problems.");
            std::process::exit(1);
        }
    };

    println!(
        "Judging '{}' against {}...",
        problem.id,
        args.case_dir.display()
    );
    let start = Instant::now();

    let summary = match judge_directory(problem, &args.case_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read case directory: {}", e);
            std::process::exit(1);
        }
    };

    if summary.verdicts.is_empty() {
        println!("No cases found (expected <name>.in / <name>.ans pairs).");
        std::process::exit(1);
    }

    for v in &summary.verdicts {
        match &v.detail {
            None => println!("  [PASS] {}", v.name),
            Some(detail) => println!("  [FAIL] {}: {}", v.name, detail),
        }
    }

    println!(
        "{}/{} cases passed in {:.3} seconds.",
        summary.passed(),
        summary.verdicts.len(),
        start.elapsed().as_secs_f64()
    );

    if !summary.all_passed() {
        std::process::exit(1);
    }
}
