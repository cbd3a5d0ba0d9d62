//! Diff engine for pairdiff.
//!
//! Compares the two sides of a pair. Inputs of equal length are scanned
//! position by position and reported as maximal mismatching runs; inputs of
//! different length are only reported as a size mismatch.
//!
//! # Key Types
//!
//! - [`DiffSegment`] / [`compute_segments`] -- mismatching runs of two equal-length inputs
//! - [`DiffResponse`] / [`DiffStatus`] / [`compare`] -- classification of a complete pair

pub mod outcome;
pub mod segment;

pub use outcome::{compare, DiffResponse, DiffStatus};
pub use segment::{compute_segments, DiffSegment};
