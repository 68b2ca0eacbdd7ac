// src/core/mod.rs

/// Result types, categories and the error returned by every scorer.
pub mod models;

/// The three heuristic scanners: phishing, vulnerability and password strength.
pub mod scanner;

/// Static catalogue of vulnerability findings and their remediation advice.
pub mod knowledge_base;
