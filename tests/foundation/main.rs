//! Integration tests for Layer 0: Foundation
//!
//! Tests for argument bags, type-checked extraction, and errors.
