//! Decoded shapes of the model's structured replies.
//!
//! Every optional field is tolerated as absent; a missing required field is
//! a decode failure, which callers treat as "no structured result".

use serde::{Deserialize, Serialize};

/// Per-function complexity assessment for a piece of code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Functions found in the analyzed code, in reply order
    #[serde(default)]
    pub functions: Vec<FunctionComplexity>,
}

/// Complexity assessment of a single function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionComplexity {
    /// Function name as reported by the model
    pub name: String,
    /// Time complexity, e.g. `O(log n)`
    pub time_complexity: String,
    /// Space complexity, e.g. `O(1)`
    pub space_complexity: String,
    /// Model confidence: `high`, `medium`, or `low`
    pub confidence: String,
    /// Bullet points supporting the assessment
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// Best-case complexity, when reported
    #[serde(default)]
    pub best_case: Option<String>,
    /// Average-case complexity, when reported
    #[serde(default)]
    pub average_case: Option<String>,
    /// Worst-case complexity, when reported
    #[serde(default)]
    pub worst_case: Option<String>,
    /// Per-function optimization hints
    #[serde(default)]
    pub optimization_suggestions: Vec<String>,
}

impl FunctionComplexity {
    /// Whether the model reported any best/average/worst case breakdown
    pub fn has_case_analysis(&self) -> bool {
        self.best_case.is_some() || self.average_case.is_some() || self.worst_case.is_some()
    }
}

/// Detected DSA patterns, data structures, and techniques
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternReport {
    /// Overall algorithm family, e.g. `Divide and Conquer`
    #[serde(default)]
    pub algorithm_type: Option<String>,
    /// Detected patterns, strongest evidence first
    #[serde(default)]
    pub patterns: Vec<DetectedPattern>,
    /// Data structures the code relies on
    #[serde(default)]
    pub data_structures: Vec<DataStructureUsage>,
    /// Named coding techniques, e.g. `Two Pointers`
    #[serde(default)]
    pub coding_techniques: Vec<String>,
}

/// A single detected algorithmic pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedPattern {
    /// Pattern name, e.g. `Binary Search`
    pub pattern_name: String,
    /// Model confidence in `[0, 1]`
    pub confidence: f64,
    /// Evidence lines supporting the detection
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Short description of how the pattern shows up
    #[serde(default)]
    pub description: Option<String>,
}

/// How a data structure is used in the analyzed code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStructureUsage {
    /// Data structure name
    pub structure: String,
    /// How it is being used
    pub usage: String,
    /// Efficiency note, when reported
    #[serde(default)]
    pub efficiency: Option<String>,
}
