//! Unit tests for the huker installer
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod toolchain_args;
