// LeetCode endpoint functions.
// Typed query wrappers and the aggregated stats operations.

use serde_json::json;

use crate::error::{Result, StatsError};

use super::client::LeetCodeClient;
use super::merge;
use super::queries;
use super::types::{
    ContestData, LeetCodeUserStats, MatchedUser, ProblemStats, ProfileData, QuestionData,
    RecentSubmission, RecentSubmissionsData,
};

/// Number of recent accepted submissions requested.
pub const RECENT_SUBMISSION_LIMIT: u32 = 10;

impl LeetCodeClient {
    /// Get the public profile, failing when no user matches.
    pub async fn get_profile(&self, username: &str) -> Result<MatchedUser> {
        let data: ProfileData = self
            .query(queries::USER_PROFILE, json!({ "username": username }))
            .await?;
        data.matched_user.ok_or(StatsError::Missing("User"))
    }

    /// Get recent accepted submissions.
    pub async fn get_recent_submissions(&self, username: &str) -> Result<Vec<RecentSubmission>> {
        let data: RecentSubmissionsData = self
            .query(
                queries::RECENT_SUBMISSIONS,
                json!({ "username": username, "limit": RECENT_SUBMISSION_LIMIT }),
            )
            .await?;
        Ok(data.recent_ac_submission_list.unwrap_or_default())
    }

    /// Get contest ranking and history. Users who never competed get empty data.
    pub async fn get_contest_data(&self, username: &str) -> Result<ContestData> {
        self.query(queries::CONTEST_HISTORY, json!({ "username": username }))
            .await
    }

    /// Aggregate profile from the three queries, issued concurrently.
    pub async fn user_stats(&self, username: &str) -> Result<LeetCodeUserStats> {
        let (user, recent, contest) = tokio::try_join!(
            self.get_profile(username),
            self.get_recent_submissions(username),
            self.get_contest_data(username),
        )
        .map_err(StatsError::fetching("LeetCode data"))?;

        Ok(merge::build_user_stats(user, recent, contest, self.totals()))
    }

    /// Problem summary with decoded acceptance statistics.
    pub async fn problem_stats(&self, title_slug: &str) -> Result<ProblemStats> {
        self.fetch_problem(title_slug)
            .await
            .map_err(StatsError::fetching("problem data"))
    }

    async fn fetch_problem(&self, title_slug: &str) -> Result<ProblemStats> {
        let data: QuestionData = self
            .query(queries::QUESTION, json!({ "titleSlug": title_slug }))
            .await?;
        let question = data.question.ok_or(StatsError::Missing("Problem"))?;
        merge::build_problem_stats(question)
    }
}
