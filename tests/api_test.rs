// Integration tests for the HTTP API.
// Drive the router in-process against wiremock stand-ins for GitHub and LeetCode.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, header as header_eq, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use devstats::api::build_router;
use devstats::github::GitHubClient;
use devstats::leetcode::{LeetCodeClient, ProblemTotals};
use devstats::state::AppState;

fn app_for(server: &MockServer) -> Router {
    let github =
        GitHubClient::new(server.uri(), format!("{}/graphql", server.uri())).unwrap();
    let leetcode = LeetCodeClient::new(
        format!("{}/leetcode/graphql", server.uri()),
        ProblemTotals::default(),
    )
    .unwrap();
    build_router(Arc::new(AppState::new(github, leetcode)))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

fn assert_cors(headers: &header::HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

async fn mount_github_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header_eq("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.example/octocat",
            "bio": null,
            "location": "San Francisco",
            "company": "@github",
            "blog": "https://github.blog",
            "twitter_username": null,
            "public_repos": 3,
            "followers": 4000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-05-01T12:00:00Z"
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", "100"))
        .and(query_param("sort", "updated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1, "name": "hello", "html_url": "https://github.com/octocat/hello",
                "stargazers_count": 5, "forks_count": 1, "language": "Go",
                "description": "hi", "updated_at": "2024-04-01T00:00:00Z"
            },
            {
                "id": 2, "name": "spoon", "html_url": "https://github.com/octocat/spoon",
                "stargazers_count": 20, "forks_count": 2, "language": "Go",
                "description": null, "updated_at": "2024-03-01T00:00:00Z"
            },
            {
                "id": 3, "name": "knife", "html_url": "https://github.com/octocat/knife",
                "stargazers_count": 1, "forks_count": 0, "language": "Rust",
                "description": null, "updated_at": "2024-02-01T00:00:00Z"
            }
        ])))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("contributionCalendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "user": {
                    "contributionsCollection": {
                        "contributionCalendar": {
                            "totalContributions": 42,
                            "weeks": [
                                {"contributionDays": [
                                    {"contributionCount": 40, "date": "2024-04-28"},
                                    {"contributionCount": 2, "date": "2024-04-29"}
                                ]}
                            ]
                        }
                    },
                    "repositories": {
                        "nodes": [
                            {"name": "spoon", "primaryLanguage": {"name": "Go", "color": "#00ADD8"}}
                        ]
                    }
                }
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn unknown_service_lists_available_services() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let (status, headers, body) = send(&app, Method::GET, "/api/unknownsvc/stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_cors(&headers);
    let body = json_body(&body);
    assert_eq!(body["error"], "Service not found");
    assert_eq!(body["available"], json!(["github", "leetcode"]));
}

#[tokio::test]
async fn missing_service_lists_available_services() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    for uri in ["/api", "/api/"] {
        let (status, headers, body) = send(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_cors(&headers);
        let body = json_body(&body);
        assert_eq!(body["error"], "Service not found");
        assert_eq!(body["available"], json!(["github", "leetcode"]));
    }
}

#[tokio::test]
async fn unknown_endpoint_lists_service_endpoints() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let (status, _, body) = send(&app, Method::GET, "/api/leetcode/contests").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = json_body(&body);
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["service"], "leetcode");
    assert_eq!(body["available"], json!(["stats", "problem"]));

    let (status, _, body) = send(&app, Method::GET, "/api/github").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["available"], json!(["stats", "repo"]));
}

#[tokio::test]
async fn post_is_method_not_allowed() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let (status, headers, body) = send(&app, Method::POST, "/api/github/stats").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&headers);
    assert_eq!(json_body(&body), json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn options_preflight_is_empty_ok() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let (status, headers, body) = send(&app, Method::OPTIONS, "/api/github/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_cors(&headers);
}

#[tokio::test]
async fn github_stats_are_merged_and_cached() {
    let server = MockServer::start().await;
    mount_github_user(&server).await;
    let app = app_for(&server);

    let uri = "/api/github/stats?username=octocat&token=secret&service=ignored";
    let (status, headers, body) = send(&app, Method::GET, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "public, s-maxage=1800, stale-while-revalidate=3600"
    );

    let stats = json_body(&body);
    assert_eq!(stats["username"], "octocat");
    assert_eq!(stats["stars"], 26);
    assert_eq!(stats["totalContributions"], 42);
    assert_eq!(
        stats["languages"],
        json!([
            {"name": "Go", "count": 2, "color": "#00ADD8"},
            {"name": "Rust", "count": 1, "color": "#6c757d"}
        ])
    );
    assert_eq!(stats["topRepos"][0]["name"], "spoon");
    assert_eq!(stats["topRepos"][0]["url"], "https://github.com/octocat/spoon");
    assert_eq!(
        stats["contributionCalendar"][0]["contributionDays"][1],
        json!({"contributionCount": 2, "date": "2024-04-29"})
    );

    // Second request is a cache hit; the `.expect(1)` mocks verify on drop.
    let (status, _, second) = send(&app, Method::GET, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&second), stats);
}

#[tokio::test]
async fn upstream_failure_is_500_and_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let app = app_for(&server);

    let uri = "/api/github/repo?owner=octocat&repo=hello&token=bad";
    for _ in 0..2 {
        let (status, headers, body) = send(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(headers[header::CACHE_CONTROL], "public, s-maxage=300");
        let body = json_body(&body);
        assert_eq!(
            body["error"],
            "Failed to fetch repository data: Bad credentials"
        );
        assert_eq!(body["service"], "github");
        assert_eq!(body["endpoint"], "repo");
    }
}

#[tokio::test]
async fn github_username_is_encoded_as_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat%2Frepos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat%2Frepos/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": null}})))
        .mount(&server)
        .await;
    let app = app_for(&server);

    let (status, _, body) = send(
        &app,
        Method::GET,
        "/api/github/stats?username=octocat%2Frepos&token=t",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(&body)["error"],
        "Failed to fetch GitHub data: Not Found"
    );
}

#[tokio::test]
async fn missing_parameter_is_500_without_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = app_for(&server);

    let (status, _, body) = send(&app, Method::GET, "/api/leetcode/stats").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(&body)["error"],
        "Missing required parameter: username"
    );
}

#[tokio::test]
async fn leetcode_stats_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leetcode/graphql"))
        .and(body_string_contains("matchedUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "matchedUser": {
                    "username": "neal",
                    "profile": {
                        "realName": "Neal",
                        "userAvatar": "https://assets.example/neal.png",
                        "ranking": 1,
                        "reputation": 100,
                        "starRating": 5.0
                    },
                    "submitStats": {
                        "acSubmissionNum": [
                            {"difficulty": "All", "count": 3, "submissions": 4},
                            {"difficulty": "Easy", "count": 2, "submissions": 2},
                            {"difficulty": "Medium", "count": 1, "submissions": 2}
                        ]
                    },
                    "badges": [],
                    "upcomingBadges": [],
                    "activeBadge": null
                }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/leetcode/graphql"))
        .and(body_string_contains("recentAcSubmissionList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "recentAcSubmissionList": [{
                    "id": "99",
                    "title": "Two Sum",
                    "titleSlug": "two-sum",
                    "timestamp": "1717200000",
                    "statusDisplay": "Accepted",
                    "lang": "rust"
                }]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/leetcode/graphql"))
        .and(body_string_contains("userContestRanking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"userContestRanking": null, "userContestRankingHistory": null}
        })))
        .mount(&server)
        .await;
    let app = app_for(&server);

    let (status, _, body) = send(&app, Method::GET, "/api/leetcode/stats?username=neal").await;
    assert_eq!(status, StatusCode::OK);
    let stats = json_body(&body);
    assert_eq!(stats["totalSolved"], 3);
    assert_eq!(stats["totalSubmissions"], 4);
    assert_eq!(stats["acceptanceRate"], 75);
    assert_eq!(stats["hardSolved"], 0);
    assert_eq!(stats["contestCount"], 0);
    assert_eq!(stats["contestRating"], 0.0);
    assert_eq!(stats["contestRank"], 0);
    assert_eq!(
        stats["recentSubmissions"][0]["url"],
        "https://leetcode.com/problems/two-sum/"
    );
}

#[tokio::test]
async fn leetcode_problem_stats_string_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leetcode/graphql"))
        .and(body_string_contains("two-sum"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "question": {
                    "questionId": "1",
                    "title": "Two Sum",
                    "titleSlug": "two-sum",
                    "difficulty": "Easy",
                    "categoryTitle": "Algorithms",
                    "stats": "{\"acRate\":\"55.3%\"}",
                    "likes": 10,
                    "dislikes": 1,
                    "isPaidOnly": false,
                    "topicTags": [{"name": "Hash Table", "slug": "hash-table"}]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = app_for(&server);

    let (status, headers, body) =
        send(&app, Method::GET, "/api/leetcode/problem?titleSlug=two-sum").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "public, s-maxage=1800, stale-while-revalidate=3600"
    );
    let problem = json_body(&body);
    assert_eq!(problem["acceptanceRate"], "55.3%");
    assert!(problem.get("stats").is_none());
    assert_eq!(problem["topics"][0]["slug"], "hash-table");
}

#[tokio::test]
async fn healthz_reports_ok() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let (status, _, body) = send(&app, Method::GET, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"status": "ok"}));
}
