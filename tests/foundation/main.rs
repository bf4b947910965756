//! Integration tests for Layer 0: Foundation
//!
//! Tests for the value and error types.

mod error;
