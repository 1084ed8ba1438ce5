//! Fractal tree generation
//!
//! Builds a full binary tree from a trunk segment, rotating and scaling
//! the parent direction at every level.

mod algorithm;

pub use algorithm::{Branch, Children, FractalTree, GrowthParams, PreorderIter, TreeGrowth, MAX_LEVELS};
