//! Recommendation engine and the catalog plumbing around it.
//!
//! Everything except [`catalog`] is pure and synchronous: the engine takes a
//! catalog slice and one set of answers and returns a ranked list.

pub mod catalog;
pub mod filter;
pub mod normalizer;
pub mod ranker;
pub mod recommendations;
pub mod scorer;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{CatalogSnapshot, CatalogSource, FileCatalogSource, InMemoryCatalogSource};
pub use normalizer::{normalize, Constraints};
pub use recommendations::{recommend_with_relaxation, RelaxationLevel};
pub use scorer::ScoreBreakdown;
