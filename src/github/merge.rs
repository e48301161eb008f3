// Normalization of GitHub payloads.
// Merges the REST and GraphQL views of a user into one profile.

use indexmap::IndexMap;

use super::types::{
    ContributionsData, GitHubRepoStats, GitHubUserStats, LanguageStat, Repository,
    RepositoryDetails, TopRepo, User,
};

/// Color for languages GraphQL did not report a color for.
pub const FALLBACK_LANGUAGE_COLOR: &str = "#6c757d";

/// Number of repositories in the top-repositories list.
pub const TOP_REPO_COUNT: usize = 5;

/// Count repositories per primary language, in first-seen order.
pub fn count_languages(repos: &[Repository]) -> IndexMap<String, u64> {
    let mut counts = IndexMap::new();
    for language in repos.iter().filter_map(|repo| repo.language.as_deref()) {
        *counts.entry(language.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Map language name to color from GraphQL repository nodes.
pub fn language_colors(contributions: &ContributionsData) -> IndexMap<String, String> {
    let Some(user) = &contributions.user else {
        return IndexMap::new();
    };

    user.repositories
        .nodes
        .iter()
        .flatten()
        .filter_map(|node| node.primary_language.as_ref())
        .filter_map(|lang| Some((lang.name.clone(), lang.color.clone()?)))
        .collect()
}

/// Join REST counts with GraphQL colors. Counts drive the list; colors only decorate it.
pub fn merge_languages(
    counts: IndexMap<String, u64>,
    colors: &IndexMap<String, String>,
) -> Vec<LanguageStat> {
    counts
        .into_iter()
        .map(|(name, count)| {
            let color = colors
                .get(&name)
                .cloned()
                .unwrap_or_else(|| FALLBACK_LANGUAGE_COLOR.to_string());
            LanguageStat { name, count, color }
        })
        .collect()
}

/// Most-starred repositories, highest first. Ties keep listing order.
pub fn top_repos(repos: &[Repository], n: usize) -> Vec<TopRepo> {
    let mut sorted: Vec<&Repository> = repos.iter().collect();
    sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    sorted
        .into_iter()
        .take(n)
        .map(|repo| TopRepo {
            id: repo.id,
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language.clone(),
            description: repo.description.clone(),
            updated_at: repo.updated_at,
        })
        .collect()
}

/// Star total across every fetched repository.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|repo| repo.stargazers_count).sum()
}

/// Build the user profile from the three upstream responses.
pub fn build_user_stats(
    user: User,
    repos: &[Repository],
    contributions: ContributionsData,
) -> GitHubUserStats {
    let languages = merge_languages(count_languages(repos), &language_colors(&contributions));

    let (total_contributions, contribution_calendar) = match contributions.user {
        Some(graph_user) => {
            let calendar = graph_user.contributions_collection.contribution_calendar;
            (calendar.total_contributions, calendar.weeks)
        }
        None => (0, Vec::new()),
    };

    GitHubUserStats {
        username: user.login,
        name: user.name,
        avatar: user.avatar_url,
        bio: user.bio,
        location: user.location,
        company: user.company,
        blog: user.blog,
        twitter: user.twitter_username,
        repos: user.public_repos,
        stars: total_stars(repos),
        followers: user.followers,
        following: user.following,
        total_contributions,
        contribution_calendar,
        languages,
        top_repos: top_repos(repos, TOP_REPO_COUNT),
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// Build the repository summary.
pub fn build_repo_stats(
    repo: RepositoryDetails,
    commit_count: usize,
    contributor_count: usize,
) -> GitHubRepoStats {
    GitHubRepoStats {
        name: repo.name,
        full_name: repo.full_name,
        description: repo.description,
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        watchers: repo.watchers_count,
        language: repo.language,
        license: repo.license.map(|license| license.name),
        topics: repo.topics,
        commit_count,
        contributor_count,
        created_at: repo.created_at,
        updated_at: repo.updated_at,
        pushed_at: repo.pushed_at,
    }
}
