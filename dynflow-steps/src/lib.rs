/**
 * These are the interval types the decomposition produces.
 */
mod types;
pub use types::*;

/**
 * This is the decomposition itself: building per-commodity flow steps from
 * an edge's outflow history and splitting them, at a query time, into the
 * flow currently in transit and the flow still waiting in the queue.
 */
mod decompose;
pub use decompose::*;
