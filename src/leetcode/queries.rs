// GraphQL documents sent to LeetCode.

pub const USER_PROFILE: &str = r#"
query userPublicProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      realName
      userAvatar
      ranking
      reputation
      starRating
    }
    submitStats {
      acSubmissionNum {
        difficulty
        count
        submissions
      }
    }
    badges {
      id
      displayName
      icon
      category
    }
    upcomingBadges {
      name
      icon
    }
    activeBadge {
      id
      displayName
      icon
      category
    }
  }
}
"#;

pub const RECENT_SUBMISSIONS: &str = r#"
query recentAcSubmissions($username: String!, $limit: Int!) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    id
    title
    titleSlug
    timestamp
    statusDisplay
    lang
  }
}
"#;

pub const CONTEST_HISTORY: &str = r#"
query userContestRankingInfo($username: String!) {
  userContestRanking(username: $username) {
    attendedContestsCount
    rating
    globalRanking
    totalParticipants
    topPercentage
    badge {
      name
    }
  }
  userContestRankingHistory(username: $username) {
    attended
    trendDirection
    problemsSolved
    totalProblems
    finishTimeInSeconds
    rating
    ranking
    contest {
      title
      startTime
    }
  }
}
"#;

pub const QUESTION: &str = r#"
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    title
    titleSlug
    difficulty
    categoryTitle
    stats
    likes
    dislikes
    isPaidOnly
    topicTags {
      name
      slug
    }
  }
}
"#;
