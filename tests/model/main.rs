//! Integration tests for Layer 1: Model
//!
//! Tests for score objects, items, the link protocol, and the score arena.

mod linking;
mod score_objects;
