//! Command-line interface for go2json.

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::convert;
use crate::error::ConvertError;
use crate::output;
use crate::parser;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Convert Go source files into generic JSON syntax trees.
///
/// Accepts one path: a single .go file, or a directory whose .go files
/// are each converted independently. Every converted unit is written as
/// <basename>.json next to its source file.
#[derive(Parser)]
#[command(name = "go2json")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Go source file or directory to convert
    pub path: PathBuf,

    /// Abort at the first failing unit instead of continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress per-unit success lines
    #[arg(short, long)]
    pub quiet: bool,
}

/// The full per-unit pipeline: parse, convert, write.
pub fn convert_unit(path: &Path) -> Result<PathBuf, ConvertError> {
    let unit = parser::parse_unit(path)?;
    let tree = convert::to_generic_tree(&unit)?;
    output::write_unit(&unit.path, &tree)
}

/// Run the converter over the CLI's path.
pub fn run(args: &Cli) -> anyhow::Result<i32> {
    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!(
                "{} cannot access {}: {}",
                "error:".red().bold(),
                args.path.display(),
                e
            );
            return Ok(EXIT_ERROR);
        }
    };

    let units = if metadata.is_dir() {
        collect_units(&args.path)?
    } else {
        vec![args.path.clone()]
    };

    if units.is_empty() {
        eprintln!(
            "{} no Go source files under {}",
            "warning:".yellow().bold(),
            args.path.display()
        );
        return Ok(EXIT_SUCCESS);
    }

    let progress = if units.len() > 1 && !args.quiet {
        let bar = ProgressBar::new(units.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut converted = 0usize;
    let mut failed = 0usize;

    for unit_path in &units {
        match convert_unit(unit_path) {
            Ok(out) => {
                converted += 1;
                if !args.quiet {
                    println!("wrote {}", out.display());
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("{} {}", "error:".red().bold(), err);
                if args.fail_fast {
                    progress.inc(1);
                    eprintln!(
                        "{} aborting after first failure (--fail-fast)",
                        "error:".red().bold()
                    );
                    break;
                }
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if failed > 0 {
        eprintln!(
            "{} {} of {} units failed",
            "failed:".red().bold(),
            failed,
            units.len()
        );
        return Ok(EXIT_FAILED);
    }
    if !args.quiet && units.len() > 1 {
        println!("{} {} units converted", "done:".green().bold(), converted);
    }
    Ok(EXIT_SUCCESS)
}

/// Recursively collect every Go source file under `root`, sorted for
/// stable reporting. Units are independent; no cross-file state.
fn collect_units(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut units = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("go") {
                units.push(path.to_path_buf());
            }
        }
    }
    units.sort();
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_units_recurses_and_sorts() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("b.go"), "package b\n").unwrap();
        std::fs::write(temp.path().join("a.go"), "package a\n").unwrap();
        std::fs::write(temp.path().join("sub/c.go"), "package c\n").unwrap();
        std::fs::write(temp.path().join("README.md"), "not go\n").unwrap();

        let units = collect_units(temp.path()).unwrap();
        let names: Vec<_> = units
            .iter()
            .map(|p| {
                p.strip_prefix(temp.path())
                    .unwrap()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["a.go", "b.go", "sub/c.go"]);
    }

    #[test]
    fn test_convert_unit_writes_sibling_json() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("main.go");
        std::fs::write(&source, "package main\n\nfunc main() {}\n").unwrap();

        let out = convert_unit(&source).unwrap();
        assert_eq!(out, temp.path().join("main.json"));
        let document = std::fs::read_to_string(&out).unwrap();
        assert!(document.contains("\"type\": \"source_file\""));
    }

    #[test]
    fn test_convert_unit_failure_produces_no_output() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("broken.go");
        std::fs::write(&source, "package main\n\nfunc main() {\n").unwrap();

        assert!(convert_unit(&source).is_err());
        assert!(!temp.path().join("broken.json").exists());
    }
}
