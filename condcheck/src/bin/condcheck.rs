//! condcheck Command-Line Interface
//!
//! Usage:
//!   condcheck file.py...            # Report constant conditions
//!   condcheck --json file.py...     # Same, as JSON
//!
//! Exit status: 2 on usage errors, 1 if any file could not be read,
//! 0 otherwise (findings and parse errors are diagnostics, not failures).

use std::env;
use std::fs;
use std::process::ExitCode;

use condcheck::{inspect_source, render_finding, render_findings_json};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("condcheck {}", VERSION);
    eprintln!("Usage: condcheck [--json] file.py...");
}

fn main() -> ExitCode {
    let mut json = false;
    let mut paths: Vec<String> = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--version" => {
                println!("condcheck {}", VERSION);
                return ExitCode::SUCCESS;
            }
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ if arg.starts_with('-') => {
                eprintln!("condcheck: unknown option '{}'", arg);
                print_usage();
                return ExitCode::from(2);
            }
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        print_usage();
        return ExitCode::from(2);
    }

    let mut read_failed = false;

    for path in &paths {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("condcheck: cannot read {}: {}", path, e);
                read_failed = true;
                continue;
            }
        };

        let (findings, errors) = inspect_source(&source);

        for error in &errors {
            eprintln!("{}: {}", path, error);
            let context = error.format_with_context(&source);
            if !context.is_empty() {
                eprintln!("{}", context);
            }
        }

        if json {
            match render_findings_json(&findings, path, &source) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("condcheck: cannot serialize findings for {}: {}", path, e);
                    read_failed = true;
                }
            }
        } else {
            for finding in &findings {
                println!("{}", render_finding(finding, path, &source));
            }
        }
    }

    if read_failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
