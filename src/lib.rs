#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Code-Sensei - a Gemini-backed DSA and complexity analysis CLI
//!
//! There is no local analysis engine: every semantic judgment about the
//! code under inspection is delegated to the Gemini API. This crate builds
//! prompts, sends them, decodes the structured replies, and renders them
//! as color-coded terminal sections.

/// The parameterized build-prompt, send, extract pipeline
pub mod analyzer;
/// The Gemini HTTP client and the transport seam
pub mod client;
/// Command flows: analyze, interactive, demo
pub mod commands;
/// Credential and model configuration
pub mod config;
/// Error handling types and utilities
pub mod error;
/// Fenced-block payload extraction and JSON decoding
pub mod extract;
/// Logging configuration and utilities
pub mod logging;
/// Decoded reply shapes
pub mod models;
/// Prompt templates per analysis kind
pub mod prompts;
/// Terminal rendering of results
pub mod ui;

// Re-export common types
pub use analyzer::Analyzer;
pub use client::{GeminiClient, ModelTransport};
pub use config::Config;
pub use error::{Result, SenseiError};
pub use models::{
    ComplexityReport, DataStructureUsage, DetectedPattern, FunctionComplexity, PatternReport,
};
pub use prompts::{build_prompt, AnalysisKind};
