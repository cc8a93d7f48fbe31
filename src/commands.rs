//! Command flows: analyze a file, interactive paste, and the built-in demo.
//!
//! Each flow obtains input, checks availability once, then runs the
//! analysis kinds strictly in sequence, rendering each result as it
//! arrives. A kind that fails is skipped; the rest still run.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::analyzer::Analyzer;
use crate::error::Result;
use crate::ui;

/// Source extension the tool is tuned for
const EXPECTED_EXTENSION: &str = "py";

/// Built-in sample analyzed by the `demo` command
pub const DEMO_CODE: &str = r#"def binary_search(arr, target):
    """Binary search implementation"""
    left, right = 0, len(arr) - 1

    while left <= right:
        mid = (left + right) // 2

        if arr[mid] == target:
            return mid
        elif arr[mid] < target:
            left = mid + 1
        else:
            right = mid - 1

    return -1


def bubble_sort(arr):
    """Bubble sort implementation"""
    n = len(arr)

    for i in range(n):
        for j in range(0, n - i - 1):
            if arr[j] > arr[j + 1]:
                arr[j], arr[j + 1] = arr[j + 1], arr[j]

    return arr


def fibonacci(n):
    """Recursive fibonacci"""
    if n <= 1:
        return n
    return fibonacci(n-1) + fibonacci(n-2)
"#;

/// Analyzes a code file; with `detailed` the explanation is included
pub async fn analyze_file(analyzer: &Analyzer, filepath: &Path, detailed: bool) -> Result<()> {
    if !filepath.exists() {
        ui::print_error(&format!("Error: file '{}' not found", filepath.display()));
        return Ok(());
    }
    if filepath.extension().and_then(|ext| ext.to_str()) != Some(EXPECTED_EXTENSION) {
        ui::print_warning("Warning: this tool is tuned for Python source files");
    }

    ui::print_banner(analyzer.is_available());
    if !analyzer.is_available() {
        print_not_configured();
        return Ok(());
    }

    let code = match fs::read_to_string(filepath) {
        Ok(code) => code,
        Err(e) => {
            ui::print_error(&format!("Error reading file: {e}"));
            return Ok(());
        }
    };

    ui::print_info(&format!("Analyzing: {}\n", filepath.display()));
    print!("{}", render_analysis(analyzer, &code, detailed).await);
    ui::print_info("Analysis complete");
    Ok(())
}

/// Reads code from `input` until EOF and analyzes it
pub async fn run_interactive<R: Read>(analyzer: &Analyzer, mut input: R) -> Result<()> {
    ui::print_banner(analyzer.is_available());
    if !analyzer.is_available() {
        print_not_configured();
        return Ok(());
    }

    ui::print_info("Paste your code below, then press Ctrl-D (Ctrl-Z on Windows) when done:\n");

    let mut code = String::new();
    input.read_to_string(&mut code)?;

    if code.trim().is_empty() {
        ui::print_error("No code provided");
        return Ok(());
    }

    print!("\n{}", render_analysis(analyzer, &code, false).await);
    ui::print_info("Analysis complete");
    Ok(())
}

/// Runs the analysis sequence against the built-in sample
pub async fn run_demo(analyzer: &Analyzer) -> Result<()> {
    ui::print_banner(analyzer.is_available());
    if !analyzer.is_available() {
        print_not_configured();
        return Ok(());
    }

    ui::print_info("Running demo analysis on the built-in sample:\n");
    println!("{DEMO_CODE}");

    print!("{}", render_analysis(analyzer, DEMO_CODE, false).await);
    ui::print_info("Demo complete");
    Ok(())
}

/// Runs each analysis kind in sequence and concatenates the rendered
/// sections; failed kinds become a skip notice instead of a section
pub async fn render_analysis(analyzer: &Analyzer, code: &str, detailed: bool) -> String {
    let mut out = String::new();

    let pb = ui::spinner("Analyzing complexity...");
    let complexity = analyzer.analyze_complexity(code).await;
    pb.finish_and_clear();
    match complexity {
        Some(report) => out.push_str(&ui::render_complexity(&report)),
        None => out.push_str(&ui::render_skipped("complexity analysis")),
    }

    let pb = ui::spinner("Detecting patterns...");
    let patterns = analyzer.detect_patterns(code).await;
    pb.finish_and_clear();
    match patterns {
        Some(report) => out.push_str(&ui::render_patterns(&report)),
        None => out.push_str(&ui::render_skipped("pattern detection")),
    }

    if detailed {
        let pb = ui::spinner("Explaining algorithm...");
        let explanation = analyzer.explain_algorithm(code).await;
        pb.finish_and_clear();
        match explanation {
            Some(text) => out.push_str(&ui::render_explanation(&text)),
            None => out.push_str(&ui::render_skipped("algorithm explanation")),
        }
    }

    let pb = ui::spinner("Collecting optimization suggestions...");
    let optimizations = analyzer.suggest_optimizations(code).await;
    pb.finish_and_clear();
    match optimizations {
        Some(suggestions) => out.push_str(&ui::render_optimizations(&suggestions)),
        None => out.push_str(&ui::render_skipped("optimization suggestions")),
    }

    out
}

fn print_not_configured() {
    ui::print_error("Gemini API is not configured");
    ui::print_warning("Set GEMINI_API_KEY in your environment or .env file");
}
