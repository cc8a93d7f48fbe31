//! Terminal rendering of analysis results.
//!
//! Rendering never fails: missing optional fields become `N/A` or an
//! omitted subsection. Sections are returned as strings so flows can be
//! exercised in tests without capturing stdout.

use std::fmt::Write as _;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::{ComplexityReport, PatternReport};

const RULE_WIDTH: usize = 60;

/// Pattern confidences above this render with the strong style
const STRONG_CONFIDENCE: f64 = 0.8;

/// Prints the application banner with the configuration status
pub fn print_banner(available: bool) {
    let status = if available {
        "Powered by Gemini".green()
    } else {
        "Gemini API key required".yellow()
    };
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule.cyan());
    println!("{}", "  CODE-SENSEI - DSA & Complexity Analyzer".cyan().bold());
    println!("  {status}");
    println!("{}\n", rule.cyan());
}

fn section_header(title: &str) -> String {
    format!(
        "{}\n{}\n\n",
        title.green().bold(),
        "-".repeat(RULE_WIDTH).green()
    )
}

/// Renders the per-function complexity section
pub fn render_complexity(report: &ComplexityReport) -> String {
    let mut out = section_header("COMPLEXITY ANALYSIS");

    for func in &report.functions {
        let _ = writeln!(out, "{} {}", "Function:".cyan(), func.name.bright_white().bold());
        let _ = writeln!(out, "  Time Complexity:  {}", func.time_complexity.yellow());
        let _ = writeln!(out, "  Space Complexity: {}", func.space_complexity.yellow());
        let _ = writeln!(out, "  Confidence:       {}", func.confidence.to_uppercase().yellow());

        if func.has_case_analysis() {
            let _ = writeln!(out, "\n  {}", "Case Analysis:".magenta());
            let _ = writeln!(out, "    - Best Case:    {}", opt_or_na(&func.best_case));
            let _ = writeln!(out, "    - Average Case: {}", opt_or_na(&func.average_case));
            let _ = writeln!(out, "    - Worst Case:   {}", opt_or_na(&func.worst_case));
        }

        if !func.reasoning.is_empty() {
            let _ = writeln!(out, "\n  {}", "Reasoning:".magenta());
            for reason in &func.reasoning {
                let _ = writeln!(out, "    - {reason}");
            }
        }

        if !func.optimization_suggestions.is_empty() {
            let _ = writeln!(out, "\n  {}", "Optimizations:".green());
            for suggestion in &func.optimization_suggestions {
                let _ = writeln!(out, "    - {suggestion}");
            }
        }
        out.push('\n');
    }

    out
}

/// Renders the pattern detection section
pub fn render_patterns(report: &PatternReport) -> String {
    let mut out = section_header("PATTERN DETECTION");

    if let Some(algorithm_type) = &report.algorithm_type {
        let _ = writeln!(
            out,
            "{} {}\n",
            "Algorithm Type:".cyan(),
            algorithm_type.bright_white().bold()
        );
    }

    for pattern in &report.patterns {
        let percent = format!("{:.0}%", pattern.confidence * 100.0);
        let confidence = if pattern.confidence > STRONG_CONFIDENCE {
            percent.bright_green()
        } else {
            percent.yellow()
        };
        let _ = writeln!(out, "{} {}", "Pattern:".cyan(), pattern.pattern_name.bright_white().bold());
        let _ = writeln!(out, "  Confidence: {confidence}");

        if let Some(description) = &pattern.description {
            let _ = writeln!(out, "  {description}");
        }
        if !pattern.evidence.is_empty() {
            let _ = writeln!(out, "  {}", "Evidence:".magenta());
            for evidence in &pattern.evidence {
                let _ = writeln!(out, "    - {evidence}");
            }
        }
        out.push('\n');
    }

    if !report.data_structures.is_empty() {
        let _ = writeln!(out, "{}", "Data Structures Used:".cyan());
        for ds in &report.data_structures {
            let _ = writeln!(out, "  - {}: {}", ds.structure.bright_white().bold(), ds.usage);
            if let Some(efficiency) = &ds.efficiency {
                let _ = writeln!(out, "    {}", efficiency.yellow());
            }
        }
        out.push('\n');
    }

    if !report.coding_techniques.is_empty() {
        let _ = writeln!(out, "{}", "Coding Techniques:".cyan());
        for technique in &report.coding_techniques {
            let _ = writeln!(out, "  - {technique}");
        }
        out.push('\n');
    }

    out
}

/// Renders the optimization suggestions section as a numbered list
pub fn render_optimizations(suggestions: &[String]) -> String {
    let mut out = section_header("OPTIMIZATION SUGGESTIONS");
    for (i, suggestion) in suggestions.iter().enumerate() {
        let _ = writeln!(out, "{}\n", format!("{}. {suggestion}", i + 1).yellow());
    }
    out
}

/// Renders the free-form explanation section
pub fn render_explanation(text: &str) -> String {
    let mut out = section_header("ALGORITHM EXPLANATION");
    let _ = writeln!(out, "{text}\n");
    out
}

/// Renders the notice shown when an analysis kind produced no result
pub fn render_skipped(what: &str) -> String {
    format!("{}\n\n", format!("Could not complete {what}").yellow())
}

fn opt_or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Creates a spinner shown while a request is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

/// Prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.green());
}

/// Prints a warning message
pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

/// Prints an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
