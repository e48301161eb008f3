// LeetCode API module.
// Client, query documents, payload types, and profile normalization for LeetCode's GraphQL API.

pub mod client;
pub mod endpoints;
pub mod merge;
pub mod queries;
pub mod types;

pub use client::LeetCodeClient;
pub use types::{LeetCodeUserStats, ProblemStats, ProblemTotals};
