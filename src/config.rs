// Runtime configuration.
// Command-line flags with environment variable fallbacks.

use std::net::SocketAddr;

use clap::Parser;

use crate::github::client::{GITHUB_API_BASE, GITHUB_GRAPHQL_URL};
use crate::leetcode::ProblemTotals;
use crate::leetcode::client::LEETCODE_GRAPHQL_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "devstats", version, about)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "DEVSTATS_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "DEVSTATS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// GitHub REST API base URL.
    #[arg(long, env = "DEVSTATS_GITHUB_API_URL", default_value = GITHUB_API_BASE)]
    pub github_api_url: String,

    /// GitHub GraphQL endpoint.
    #[arg(long, env = "DEVSTATS_GITHUB_GRAPHQL_URL", default_value = GITHUB_GRAPHQL_URL)]
    pub github_graphql_url: String,

    /// LeetCode GraphQL endpoint.
    #[arg(long, env = "DEVSTATS_LEETCODE_GRAPHQL_URL", default_value = LEETCODE_GRAPHQL_URL)]
    pub leetcode_graphql_url: String,

    /// Reference number of easy LeetCode problems.
    #[arg(long, env = "DEVSTATS_LEETCODE_EASY_TOTAL", default_value_t = ProblemTotals::default().easy)]
    pub leetcode_easy_total: u32,

    /// Reference number of medium LeetCode problems.
    #[arg(long, env = "DEVSTATS_LEETCODE_MEDIUM_TOTAL", default_value_t = ProblemTotals::default().medium)]
    pub leetcode_medium_total: u32,

    /// Reference number of hard LeetCode problems.
    #[arg(long, env = "DEVSTATS_LEETCODE_HARD_TOTAL", default_value_t = ProblemTotals::default().hard)]
    pub leetcode_hard_total: u32,
}

impl Config {
    pub fn problem_totals(&self) -> ProblemTotals {
        ProblemTotals {
            easy: self.leetcode_easy_total,
            medium: self.leetcode_medium_total,
            hard: self.leetcode_hard_total,
        }
    }
}
