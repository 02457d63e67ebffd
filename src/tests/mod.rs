//! End-to-end and property-based tests for the public API.

mod simple;
