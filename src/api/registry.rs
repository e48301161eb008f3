// Service registry.
// The fixed set of services and operations reachable through the API, with their cache TTLs.

use std::time::Duration;

const THIRTY_MINUTES: Duration = Duration::from_secs(30 * 60);
const ONE_HOUR: Duration = Duration::from_secs(60 * 60);

/// Upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    GitHub,
    LeetCode,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::GitHub, Service::LeetCode];

    /// Path segment naming this service.
    pub fn name(&self) -> &'static str {
        match self {
            Service::GitHub => "github",
            Service::LeetCode => "leetcode",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.name() == name)
    }

    /// Operations exposed by this service.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Service::GitHub => &[Operation::GitHubStats, Operation::GitHubRepo],
            Service::LeetCode => &[Operation::LeetCodeStats, Operation::LeetCodeProblem],
        }
    }

    /// Endpoint names exposed by this service.
    pub fn endpoints(&self) -> Vec<&'static str> {
        self.operations().iter().map(Operation::endpoint).collect()
    }

    /// Names of every service.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Service::name).collect()
    }
}

/// A single (service, endpoint) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GitHubStats,
    GitHubRepo,
    LeetCodeStats,
    LeetCodeProblem,
}

impl Operation {
    pub fn service(&self) -> Service {
        match self {
            Operation::GitHubStats | Operation::GitHubRepo => Service::GitHub,
            Operation::LeetCodeStats | Operation::LeetCodeProblem => Service::LeetCode,
        }
    }

    /// Path segment naming this operation within its service.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::GitHubStats | Operation::LeetCodeStats => "stats",
            Operation::GitHubRepo => "repo",
            Operation::LeetCodeProblem => "problem",
        }
    }

    /// How long a successful result stays cached.
    pub fn ttl(&self) -> Duration {
        match self {
            Operation::GitHubStats | Operation::LeetCodeStats => THIRTY_MINUTES,
            Operation::GitHubRepo | Operation::LeetCodeProblem => ONE_HOUR,
        }
    }
}

/// Why a (service, endpoint) pair did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    UnknownService,
    UnknownEndpoint(Service),
}

/// Resolve path segments to an operation.
pub fn resolve(service: &str, endpoint: &str) -> Result<Operation, RouteError> {
    let service = Service::from_name(service).ok_or(RouteError::UnknownService)?;
    service
        .operations()
        .iter()
        .copied()
        .find(|operation| operation.endpoint() == endpoint)
        .ok_or(RouteError::UnknownEndpoint(service))
}
