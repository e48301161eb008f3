// Normalization of LeetCode payloads.

use crate::error::{Result, StatsError};

use super::types::{
    ContestData, DifficultyCount, LeetCodeUserStats, MatchedUser, ProblemStats, ProblemTotals,
    Question, QuestionStats, RecentSubmission, SubmissionSummary,
};

pub const PROBLEMS_URL: &str = "https://leetcode.com/problems";

/// Contest history entries kept in the profile.
pub const CONTEST_HISTORY_LIMIT: usize = 5;

/// Find the counts for a difficulty label. A missing label counts as zero.
pub fn difficulty_count(stats: &[DifficultyCount], difficulty: &str) -> DifficultyCount {
    stats
        .iter()
        .find(|entry| entry.difficulty == difficulty)
        .cloned()
        .unwrap_or_default()
}

/// Percentage of submissions accepted, rounded. Zero when there are no submissions.
pub fn acceptance_rate(solved: u64, submissions: u64) -> u64 {
    if submissions == 0 {
        return 0;
    }
    (solved as f64 * 100.0 / submissions as f64).round() as u64
}

pub fn problem_url(title_slug: &str) -> String {
    format!("{}/{}/", PROBLEMS_URL, title_slug)
}

fn summarize_submission(submission: RecentSubmission) -> SubmissionSummary {
    SubmissionSummary {
        url: problem_url(&submission.title_slug),
        id: submission.id,
        title: submission.title,
        title_slug: submission.title_slug,
        timestamp: submission.timestamp,
        status: submission.status_display,
        language: submission.lang,
    }
}

/// Build the profile from the three query results.
pub fn build_user_stats(
    user: MatchedUser,
    recent: Vec<RecentSubmission>,
    contest: ContestData,
    totals: ProblemTotals,
) -> LeetCodeUserStats {
    let submit_stats = &user.submit_stats.ac_submission_num;
    let easy = difficulty_count(submit_stats, "Easy");
    let medium = difficulty_count(submit_stats, "Medium");
    let hard = difficulty_count(submit_stats, "Hard");

    let total_solved = easy.count + medium.count + hard.count;
    let total_submissions = easy.submissions + medium.submissions + hard.submissions;

    let ranking = contest.user_contest_ranking;
    let mut contest_history = contest.user_contest_ranking_history.unwrap_or_default();
    contest_history.truncate(CONTEST_HISTORY_LIMIT);

    LeetCodeUserStats {
        username: user.username,
        name: user.profile.real_name,
        avatar: user.profile.user_avatar,
        ranking: user.profile.ranking,
        reputation: user.profile.reputation,
        star_rating: user.profile.star_rating,

        total_solved,
        total_submissions,
        acceptance_rate: acceptance_rate(total_solved, total_submissions),
        easy_solved: easy.count,
        medium_solved: medium.count,
        hard_solved: hard.count,
        easy_total: totals.easy,
        medium_total: totals.medium,
        hard_total: totals.hard,

        contest_count: ranking
            .as_ref()
            .and_then(|r| r.attended_contests_count)
            .unwrap_or(0),
        contest_rating: ranking.as_ref().and_then(|r| r.rating).unwrap_or(0.0),
        contest_rank: ranking
            .as_ref()
            .and_then(|r| r.global_ranking)
            .unwrap_or(0),
        contest_top_percentage: ranking
            .as_ref()
            .and_then(|r| r.top_percentage)
            .unwrap_or(0.0),
        contest_badge: ranking.and_then(|r| r.badge).map(|badge| badge.name),

        recent_submissions: recent.into_iter().map(summarize_submission).collect(),
        contest_history,

        badges: user.badges.unwrap_or_default(),
        upcoming_badges: user.upcoming_badges.unwrap_or_default(),
        active_badge: user.active_badge,
    }
}

/// Build the problem summary, decoding the string-encoded stats document.
pub fn build_problem_stats(question: Question) -> Result<ProblemStats> {
    let stats: QuestionStats = serde_json::from_str(&question.stats).map_err(StatsError::Json)?;

    Ok(ProblemStats {
        id: question.question_id,
        title: question.title,
        title_slug: question.title_slug,
        difficulty: question.difficulty,
        category: question.category_title,
        acceptance_rate: stats.ac_rate,
        total_accepted: stats.total_accepted,
        total_submission: stats.total_submission,
        likes: question.likes,
        dislikes: question.dislikes,
        is_paid_only: question.is_paid_only,
        topics: question.topic_tags.unwrap_or_default(),
    })
}
