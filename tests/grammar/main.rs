//! Integration tests for Layer 0: Grammar
//!
//! Tests for validation, decomposition, composition, and `StandardName`.

mod names;
mod properties;
