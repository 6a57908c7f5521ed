//! # tsresolve Bench
//!
//! Benchmarking utilities for tsresolve: synthetic schemas and a simple
//! generation throughput harness.

pub mod synthetic;
pub mod throughput;
