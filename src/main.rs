// Interactive shell - prompts for the roster export, runs the pipeline,
// and reports success or failure. All conversion logic lives in the
// library; this binary only collects input and presents results.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use roster_convert::{convert_file, ConversionReport};

fn main() {
    println!("Welcome to the Excel to CSV Converter.");
    println!("If you downloaded the Excel file from RecDesk, it may be in your Downloads folder.");
    println!("Example file path: C:/Users/YourName/Downloads/RosterExtract-XXXXXX.xls");

    let stdin = io::stdin();
    let input_path = match prompt_for_path(&mut stdin.lock()) {
        Some(path) => path,
        None => {
            println!("Program terminated by user. Exiting...");
            return;
        }
    };

    match convert_file(&input_path) {
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("❌ CSV creation failed.");
            eprintln!("   Error: {}", e);
            process::exit(1);
        }
    }
}

/// Prompt until the user supplies an existing `.xls` path.
/// Returns `None` when the user quits (or stdin closes).
fn prompt_for_path(input: &mut impl BufRead) -> Option<PathBuf> {
    loop {
        print!("Enter the path to the Excel file (or type QUIT to exit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None, // EOF counts as quit
            Ok(_) => {}
        }

        let cleaned = clean_path_input(&line);
        if cleaned.eq_ignore_ascii_case("QUIT") {
            return None;
        }

        let path = PathBuf::from(&cleaned);
        if !is_acceptable_input(&path) {
            println!("Invalid file path. Please check the path and try again.");
            continue;
        }

        return Some(path);
    }
}

/// Trim whitespace and strip surrounding double quotes (pasting a path
/// from a file manager usually includes them).
fn clean_path_input(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

/// The path must exist on disk and carry the legacy `.xls` extension.
fn is_acceptable_input(path: &Path) -> bool {
    let has_xls_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xls"))
        .unwrap_or(false);

    has_xls_extension && path.exists()
}

// Advisory warnings are printed by the pipeline itself so they survive
// a fatal abort; only the success summary is printed here.
fn print_report(report: &ConversionReport) {
    println!(
        "✅ CSV file created successfully at: {}",
        report.output_path.display()
    );
    println!(
        "   {} students written, {} rows skipped",
        report.written, report.skipped
    );
}

// ============================================================================
// TESTS
// ============================================================================
