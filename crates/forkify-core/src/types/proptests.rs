//! Property-based tests for identifier types.
