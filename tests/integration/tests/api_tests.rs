//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Register a fresh account and log it in
async fn signed_in(server: &TestServer) -> (UserResponse, String) {
    let request = CreateUserRequest::unique();
    let response = server.post("/api/v0/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v0/users/token", &LoginRequest::from_user(&request))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (user, token.access_token)
}

async fn create_report(server: &TestServer, token: &str) -> ReportResponse {
    let response = server
        .post_auth("/api/v0/reports", token, &CreateReportRequest::sample())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn vote(server: &TestServer, token: &str, report_id: i64, direction: &str) -> ReportStats {
    let response = server
        .post_auth_empty(&format!("/api/v0/reports/{report_id}/{direction}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_root_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v0").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({"message": "this is pin-drop"}));
}

// ============================================================================
// User and Session Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/v0/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(user.id > 0);
    assert_eq!(user.email, request.email);
    assert_eq!(user.first_name, request.first_name);
    assert_eq!(user.phone_num, request.phone_num);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    server.post("/api/v0/users", &request).await.unwrap();

    let response = server.post("/api/v0/users", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest {
        password: "short".to_string(),
        ..CreateUserRequest::unique()
    };

    let response = server.post("/api/v0/users", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "WEAK_PASSWORD");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    server.post("/api/v0/users", &request).await.unwrap();

    let response = server
        .post("/api/v0/users/token", &LoginRequest::from_user(&request))
        .await
        .unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "bearer");
    assert!(token.expires_in > 0);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    server.post("/api/v0/users", &request).await.unwrap();

    let login = LoginRequest {
        email: request.email.clone(),
        password: "Wrong0Password".to_string(),
    };
    let response = server.post("/api/v0/users/token", &login).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_logout_deactivates_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = signed_in(&server).await;

    let response = server
        .delete_auth("/api/v0/users/token", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["detail"], "Session terminated");

    let response = server
        .get_auth(&format!("/api/v0/users/{}", user.id), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "SESSION_INACTIVE");
}

#[tokio::test]
async fn test_sessions_are_independent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();
    server.post("/api/v0/users", &request).await.unwrap();

    let mut tokens = Vec::new();
    for _ in 0..2 {
        let response = server
            .post("/api/v0/users/token", &LoginRequest::from_user(&request))
            .await
            .unwrap();
        let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
        tokens.push(token.access_token);
    }

    server
        .delete_auth("/api/v0/users/token", &tokens[0])
        .await
        .unwrap();

    // Second session survives the first one's logout
    let report = create_report(&server, &tokens[1]).await;
    assert!(report.id > 0);
}

#[tokio::test]
async fn test_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = signed_in(&server).await;

    let response = server
        .get_auth(&format!("/api/v0/users/{}", user.id), &token)
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, user.email);

    let response = server
        .get_auth(&format!("/api/v0/users/{}", i64::MAX), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = signed_in(&server).await;

    let response = server
        .patch_auth("/api/v0/users", &token, &json!({"first_name": "Renamed"}))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.first_name, "Renamed");
    assert_eq!(user.last_name, "Reporter");

    let response = server
        .patch_auth("/api/v0/users", &token, &json!({}))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "NO_CHANGES");
}

#[tokio::test]
async fn test_delete_user_revokes_sessions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = signed_in(&server).await;

    let response = server.delete_auth("/api/v0/users", &token).await.unwrap();
    let deleted: DeletedUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.message, "user deleted");
    assert_eq!(deleted.first_name, "Test");

    // The account is gone, so the token is refused before its session is consulted
    let response = server
        .post_auth("/api/v0/reports", &token, &CreateReportRequest::sample())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_create_report_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v0/reports", &CreateReportRequest::sample())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_report_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = signed_in(&server).await;
    let report = create_report(&server, &token).await;

    assert_eq!(report.user_id, user.id);
    assert_eq!(report.title, "Broken streetlight");

    let response = server
        .get(&format!("/api/v0/reports/{}", report.id))
        .await
        .unwrap();
    let fetched: ReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, report.id);
    assert_eq!(fetched.timestamp, report.timestamp);

    let response = server
        .patch_auth(
            &format!("/api/v0/reports/{}", report.id),
            &token,
            &json!({"title": "Fixed streetlight"}),
        )
        .await
        .unwrap();
    let updated: ReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Fixed streetlight");
    assert_eq!(updated.location, report.location);

    let response = server
        .delete_auth(&format!("/api/v0/reports/{}", report.id), &token)
        .await
        .unwrap();
    let deleted: DeletedReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.message, "report deleted");
    assert_eq!(deleted.title, "Fixed streetlight");

    let response = server
        .get(&format!("/api/v0/reports/{}", report.id))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_REPORT");
}

#[tokio::test]
async fn test_report_owner_checks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signed_in(&server).await;
    let (_, other) = signed_in(&server).await;
    let report = create_report(&server, &owner).await;
    let path = format!("/api/v0/reports/{}", report.id);

    let response = server
        .patch_auth(&path, &other, &json!({"title": "Hijacked"}))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_REPORT_OWNER");

    let response = server.delete_auth(&path, &other).await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_REPORT_OWNER");

    let response = server.patch_auth(&path, &owner, &json!({})).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "NO_CHANGES");
}

#[tokio::test]
async fn test_list_reports_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = signed_in(&server).await;
    let first = create_report(&server, &token).await;
    let second = create_report(&server, &token).await;

    let response = server
        .get(&format!("/api/v0/reports?after={}&limit=1", first.id))
        .await
        .unwrap();
    let page: ReportListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.reports.len(), 1);
    assert!(page.reports[0].id > first.id);
    assert!(page.reports[0].id <= second.id);

    let response = server.get("/api/v0/reports?limit=101").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_views_leave_votes_alone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = signed_in(&server).await;
    let report = create_report(&server, &token).await;

    vote(&server, &token, report.id, "upvote").await;

    let mut stats = None;
    for _ in 0..3 {
        let response = server
            .post_empty(&format!("/api/v0/reports/{}/views", report.id))
            .await
            .unwrap();
        stats = Some(assert_json::<ReportStats>(response, StatusCode::OK).await.unwrap());
    }
    let stats = stats.unwrap();

    assert_eq!(stats.view_count, 3);
    assert_eq!(stats.votes(), (1, 0));

    let response = server
        .get(&format!("/api/v0/reports/{}/stats", report.id))
        .await
        .unwrap();
    let fetched: ReportStats = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, stats);
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signed_in(&server).await;
    let (_, bob) = signed_in(&server).await;
    let report = create_report(&server, &alice).await;

    let response = server
        .get(&format!("/api/v0/reports/{}/stats", report.id))
        .await
        .unwrap();
    let stats: ReportStats = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.report_id, report.id);
    assert_eq!(stats.votes(), (0, 0));

    assert_eq!(vote(&server, &alice, report.id, "upvote").await.votes(), (1, 0));
    assert_eq!(vote(&server, &alice, report.id, "upvote").await.votes(), (0, 0));
    assert_eq!(vote(&server, &alice, report.id, "downvote").await.votes(), (0, 1));
    assert_eq!(vote(&server, &bob, report.id, "upvote").await.votes(), (1, 1));

    // Switching moves one vote between the counters
    assert_eq!(vote(&server, &alice, report.id, "upvote").await.votes(), (2, 0));
}

#[tokio::test]
async fn test_vote_unknown_report() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = signed_in(&server).await;

    let response = server
        .post_auth_empty(&format!("/api/v0/reports/{}/upvote", i64::MAX), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_REPORT");
}

#[tokio::test]
async fn test_vote_deleted_report() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = signed_in(&server).await;
    let report = create_report(&server, &token).await;

    server
        .delete_auth(&format!("/api/v0/reports/{}", report.id), &token)
        .await
        .unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v0/reports/{}/downvote", report.id), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_REPORT");
}

#[tokio::test]
async fn test_vote_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_empty("/api/v0/reports/1/upvote").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_concurrent_upvotes() {
    if !check_test_env().await {
        return;
    }

    const VOTERS: usize = 8;

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signed_in(&server).await;
    let report = create_report(&server, &owner).await;

    let mut tokens = Vec::with_capacity(VOTERS);
    for _ in 0..VOTERS {
        tokens.push(signed_in(&server).await.1);
    }

    let path = format!("/api/v0/reports/{}/upvote", report.id);
    let responses =
        futures::future::join_all(tokens.iter().map(|t| server.post_auth_empty(&path, t))).await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v0/reports/{}/stats", report.id))
        .await
        .unwrap();
    let stats: ReportStats = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.votes(), (i64::try_from(VOTERS).unwrap(), 0));
}
