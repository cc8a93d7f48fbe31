//! Prompt templates for each analysis kind.
//!
//! Templates carry a `{0}` slot for the code under analysis; structured
//! kinds spell out the exact JSON schema the reply must follow.

use std::fmt;

/// The four supported request types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Time/space complexity per function
    Complexity,
    /// DSA pattern detection
    Pattern,
    /// Concrete optimization suggestions
    Optimization,
    /// Free-form natural-language explanation
    Explanation,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Complexity => "complexity",
            Self::Pattern => "pattern",
            Self::Optimization => "optimization",
            Self::Explanation => "explanation",
        };
        f.write_str(name)
    }
}

/// Template for the per-function complexity request
pub const COMPLEXITY_ANALYSIS: &str = r#"Analyze the time and space complexity of this code. Provide a detailed, accurate analysis.

Code:
```python
{0}
```

Provide your analysis in the following JSON format:
{
    "functions": [
        {
            "name": "function_name",
            "time_complexity": "O(...)",
            "space_complexity": "O(...)",
            "confidence": "high|medium|low",
            "reasoning": [
                "Point 1 about why this complexity",
                "Point 2 about algorithm analysis"
            ],
            "best_case": "O(...)",
            "average_case": "O(...)",
            "worst_case": "O(...)",
            "optimization_suggestions": [
                "Suggestion 1 if applicable",
                "Suggestion 2 if applicable"
            ]
        }
    ]
}

Be precise and thorough. Consider:
1. Loop depths and iterations
2. Recursive calls and their branching
3. Data structure operations
4. Hidden complexities in library functions
5. Best, average, and worst case scenarios"#;

/// Template for the DSA pattern detection request
pub const PATTERN_DETECTION: &str = r#"Analyze this code and identify all Data Structures & Algorithms patterns being used.

Code:
```python
{0}
```

Provide your analysis in the following JSON format:
{
    "patterns": [
        {
            "pattern_name": "Pattern Name",
            "confidence": 0.95,
            "evidence": [
                "Evidence point 1",
                "Evidence point 2"
            ],
            "description": "Brief description of how this pattern is implemented"
        }
    ],
    "data_structures": [
        {
            "structure": "Data Structure Name",
            "usage": "How it's being used",
            "efficiency": "Why this choice is good/bad"
        }
    ],
    "algorithm_type": "Type of algorithm (e.g., Greedy, Dynamic Programming, Divide and Conquer)",
    "coding_techniques": [
        "Technique 1 (e.g., Two Pointers, Sliding Window)",
        "Technique 2"
    ]
}

Common patterns to look for:
- Binary Search
- Two Pointers
- Sliding Window
- Fast & Slow Pointers
- Merge Intervals
- Tree BFS/DFS
- Graph BFS/DFS
- Dynamic Programming
- Backtracking
- Greedy Algorithms
- Divide and Conquer
- Monotonic Stack/Queue
- Top K Elements
- Topological Sort"#;

/// Template for the optimization suggestions request
pub const OPTIMIZATION_SUGGESTIONS: &str = r#"Analyze this code and provide specific optimization suggestions.

Code:
```python
{0}
```

Provide 3-5 concrete optimization suggestions focusing on:
1. Time complexity improvements
2. Space complexity improvements
3. Code readability and maintainability
4. Idiomatic best practices
5. Edge case handling

Format as a JSON array:
[
    "Suggestion 1 with specific code change",
    "Suggestion 2 with reasoning",
    "Suggestion 3 with example"
]"#;

/// Template for the free-form explanation request
pub const ALGORITHM_EXPLANATION: &str = r#"Provide a clear, educational explanation of what this algorithm does and how it works.

Code:
```python
{0}
```

Explain in 2-3 paragraphs:
1. What the algorithm does (high-level purpose)
2. How it works (step-by-step logic)
3. Why it's implemented this way (design decisions)

Keep it clear and educational, as if teaching a student."#;

/// Builds the instruction string sent to the model for the given kind
///
/// Pure and deterministic: identical `(code, kind)` always yields an
/// identical prompt. Succeeds for any input, including empty code.
pub fn build_prompt(code: &str, kind: AnalysisKind) -> String {
    let template = match kind {
        AnalysisKind::Complexity => COMPLEXITY_ANALYSIS,
        AnalysisKind::Pattern => PATTERN_DETECTION,
        AnalysisKind::Optimization => OPTIMIZATION_SUGGESTIONS,
        AnalysisKind::Explanation => ALGORITHM_EXPLANATION,
    };
    template.replace("{0}", code)
}
