// devstats: caching proxy for GitHub and LeetCode developer statistics.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod leetcode;
pub mod observability;
pub mod state;
pub mod upstream;

pub use error::{Result, StatsError};
