//! Integration Tests Module
//!
//! End-to-end tests for Recruiter Check against a mock analysis service.
//! Tests cover the submission lifecycle, result presentation, error
//! reporting, the interactive session and the settings layer.

// Submission lifecycle through AppState and the HTTP client
mod analysis_flow_test;

// Interactive session over a mock service
mod interactive_test;

// Settings file, environment and flag overrides
mod config_test;
