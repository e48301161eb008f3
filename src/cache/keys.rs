// Cache key construction.
// Builds deterministic `<service>:<identity>:<operation>` keys for each upstream request.

/// Key for a GitHub user profile.
pub fn github_user_key(username: &str) -> String {
    format!("github:{}:stats", escape_segment(username))
}

/// Key for a GitHub repository summary.
pub fn github_repo_key(owner: &str, repo: &str) -> String {
    format!(
        "github:{}/{}:stats",
        escape_segment(owner),
        escape_segment(repo)
    )
}

/// Key for a LeetCode user profile.
pub fn leetcode_user_key(username: &str) -> String {
    format!("leetcode:{}:stats", escape_segment(username))
}

/// Key for a LeetCode problem.
pub fn leetcode_problem_key(title_slug: &str) -> String {
    format!("leetcode:problem:{}", escape_segment(title_slug))
}

/// Escape characters that delimit key segments.
/// Percent-escaping keeps distinct inputs distinct.
fn escape_segment(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            ':' => escaped.push_str("%3A"),
            '/' => escaped.push_str("%2F"),
            _ => escaped.push(c),
        }
    }
    escaped
}
