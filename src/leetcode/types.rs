// LeetCode GraphQL response types.
// Query payloads as received, and the normalized shapes served to clients.

use serde::{Deserialize, Serialize};

// ---- Profile query ----

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    pub profile: Profile,
    pub submit_stats: SubmitStats,
    pub badges: Option<Vec<Badge>>,
    pub upcoming_badges: Option<Vec<UpcomingBadge>>,
    pub active_badge: Option<Badge>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub real_name: Option<String>,
    pub user_avatar: Option<String>,
    pub ranking: Option<i64>,
    pub reputation: Option<i64>,
    pub star_rating: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<DifficultyCount>,
}

/// Accepted problems and submissions for one difficulty label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u64,
    pub submissions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub display_name: String,
    pub icon: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingBadge {
    pub name: String,
    pub icon: String,
}

// ---- Recent submissions query ----

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmissionsData {
    pub recent_ac_submission_list: Option<Vec<RecentSubmission>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub id: String,
    pub title: String,
    pub title_slug: String,
    pub timestamp: String,
    pub status_display: String,
    pub lang: String,
}

// ---- Contest query ----

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestData {
    pub user_contest_ranking: Option<ContestRanking>,
    pub user_contest_ranking_history: Option<Vec<ContestHistoryEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    pub attended_contests_count: Option<u64>,
    pub rating: Option<f64>,
    pub global_ranking: Option<u64>,
    pub total_participants: Option<u64>,
    pub top_percentage: Option<f64>,
    pub badge: Option<ContestBadge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContestBadge {
    pub name: String,
}

/// One contest in the user's history. Served to clients as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestHistoryEntry {
    pub attended: bool,
    pub trend_direction: Option<String>,
    pub problems_solved: u64,
    pub total_problems: u64,
    pub finish_time_in_seconds: u64,
    pub rating: f64,
    pub ranking: u64,
    pub contest: ContestRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRef {
    pub title: String,
    pub start_time: i64,
}

// ---- Problem query ----

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionData {
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    pub category_title: Option<String>,
    /// JSON document encoded as a string.
    pub stats: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub is_paid_only: bool,
    pub topic_tags: Option<Vec<TopicTag>>,
}

/// Decoded `Question::stats`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStats {
    pub ac_rate: String,
    pub total_accepted: Option<String>,
    pub total_submission: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

// ---- Normalized output ----

/// Problem counts per difficulty used as progress denominators.
///
/// These are reference values, not fetched; the real problem set grows over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemTotals {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl Default for ProblemTotals {
    fn default() -> Self {
        Self {
            easy: 800,
            medium: 1600,
            hard: 600,
        }
    }
}

/// Merged LeetCode profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeUserStats {
    pub username: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub ranking: Option<i64>,
    pub reputation: Option<i64>,
    pub star_rating: Option<f64>,

    pub total_solved: u64,
    pub total_submissions: u64,
    pub acceptance_rate: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub easy_total: u32,
    pub medium_total: u32,
    pub hard_total: u32,

    pub contest_count: u64,
    pub contest_rating: f64,
    pub contest_rank: u64,
    pub contest_top_percentage: f64,
    pub contest_badge: Option<String>,

    pub recent_submissions: Vec<SubmissionSummary>,
    pub contest_history: Vec<ContestHistoryEntry>,

    pub badges: Vec<Badge>,
    pub upcoming_badges: Vec<UpcomingBadge>,
    pub active_badge: Option<Badge>,
}

/// Recent accepted submission with a link to its problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: String,
    pub title: String,
    pub title_slug: String,
    pub timestamp: String,
    pub status: String,
    pub language: String,
    pub url: String,
}

/// Problem summary with decoded statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStats {
    pub id: String,
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    pub category: Option<String>,
    pub acceptance_rate: String,
    pub total_accepted: Option<String>,
    pub total_submission: Option<String>,
    pub likes: i64,
    pub dislikes: i64,
    pub is_paid_only: bool,
    pub topics: Vec<TopicTag>,
}
