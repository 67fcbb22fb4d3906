#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for dynamic flows.
///
/// The models in this module are primarily data structures with minimal
/// business logic: the function types carry their validated samples and
/// answer point queries, while `Network` and `Flow` are read-only
/// containers constructed once from upstream data. The decomposition
/// logic that consumes them lives in the `dynflow-steps` crate.
pub mod models;
