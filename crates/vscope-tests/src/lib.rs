//! Integration tests for vscope crates.
//!
//! End-to-end checks of the sample -> HSV -> wheel remap -> plot pipeline.
