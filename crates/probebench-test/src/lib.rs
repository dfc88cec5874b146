//! Shared test fixtures for probebench crates.
//!
//! This crate provides sorted arrays and helpers for testing.
//! It does NOT depend on `probebench-core` so that the core crate can use it
//! as a dev-dependency without a cycle; arrays are plain `Vec<i64>`.
//!
//! - [`arrays`] - fixed and seeded sorted arrays, absent-key helpers
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! probebench-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use probebench_test::arrays::{clustered_sorted, uniform_sorted, SAMPLE};
//! ```

pub mod arrays;

pub use arrays::{
    absent_keys, all_equal, binary_probe_bound, clustered_sorted, uniform_sorted, FLAT, SAMPLE,
};
