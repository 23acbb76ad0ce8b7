//! Single-problem solver CLI
//!
//! Usage: gesp_solve <problem-id> [--input <FILE>]
//!
//! Reads the problem input from stdin (or a file) and prints the answer.
//!
//! Example:
//!   gesp_solve prime-count --input cases/small.in
//!   echo "10" | gesp_solve prime-count

use gesp_solvers::app::solve;
use gesp_solvers::app::registry::problems;
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    problem_id: String,
    input: Option<PathBuf>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <problem-id> [--input <FILE>]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input <FILE>   Read problem input from FILE instead of stdin");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Problems:");
    for p in problems() {
        eprintln!("  {:<18} {}", p.id, p.summary);
    }
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut problem_id: Option<String> = None;
    let mut input: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                if i >= args.len() {
                    return Err("--input requires a value".to_string());
                }
                input = Some(PathBuf::from(&args[i]));
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

    let problem_id = problem_id.ok_or("Missing problem id")?;

    Ok(Args { problem_id, input })
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

    let input = match &args.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: cannot read '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    let start = Instant::now();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = solve(&args.problem_id, &input, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = out.flush() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    eprintln!("Solved in {:.3} seconds.", start.elapsed().as_secs_f64());
}
