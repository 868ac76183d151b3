//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: TEST_DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// A well-formed Snowflake that no generated row will carry
const UNKNOWN_ID: &str = "999999999999999";

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

// ============================================================================
// Message Board Tests
// ============================================================================

#[tokio::test]
async fn test_create_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Anyone selling a calculus textbook?");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(message.author_id, author.id);
    assert_eq!(message.author_name, author.name);
    assert_eq!(message.body, "Anyone selling a calculus textbook?");
    assert_eq!(message.like_count, 0);
    assert_eq!(message.comment_count, 0);
    assert!(!message.viewer_has_liked);
}

#[tokio::test]
async fn test_create_message_rejects_empty_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = serde_json::json!({"userId": "100", "userName": "ayse", "body": ""});
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(err.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Lost my student card near the gym");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let created: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/messages/{}", created.id))
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(message.id, created.id);
    assert_eq!(message.body, "Lost my student card near the gym");
}

#[tokio::test]
async fn test_get_message_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get(&format!("/api/v1/messages/{UNKNOWN_ID}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_messages_cursor_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();

    // Three messages with ascending ids
    let mut ids: Vec<String> = Vec::new();
    for i in 0..3 {
        let request = CreateMessageRequest::posted_by(&author, &format!("Post {i}"));
        let response = server.post("/api/v1/messages", &request).await.unwrap();
        let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(message.id);
    }

    // The board is shared with concurrent tests, so assert cursor bounds
    // and ordering rather than exact contents.
    let response = server
        .get(&format!("/api/v1/messages?before={}&limit=100", ids[2]))
        .await
        .unwrap();
    let page: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let cursor: i64 = ids[2].parse().unwrap();
    let page_ids: Vec<i64> = page.iter().map(|m| m.id.parse().unwrap()).collect();
    assert!(page_ids.iter().all(|&id| id < cursor));
    assert!(page_ids.windows(2).all(|w| w[0] > w[1]), "newest first");

    // The after cursor flips the ordering to oldest first
    let response = server
        .get(&format!("/api/v1/messages?after={}&limit=100", ids[0]))
        .await
        .unwrap();
    let page: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let cursor: i64 = ids[0].parse().unwrap();
    let page_ids: Vec<i64> = page.iter().map(|m| m.id.parse().unwrap()).collect();
    assert!(page_ids.iter().all(|&id| id > cursor));
    assert!(page_ids.windows(2).all(|w| w[0] < w[1]), "oldest first");
}

#[tokio::test]
async fn test_get_user_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();

    for body in ["first", "second"] {
        let request = CreateMessageRequest::posted_by(&author, body);
        let response = server.post("/api/v1/messages", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/users/{}/messages", author.id))
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body, "second");
    assert_eq!(messages[1].body, "first");
}

#[tokio::test]
async fn test_delete_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Selling my bike, meet at dorm B");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_json(
            &format!("/api/v1/messages/{}", message.id),
            &ActorRequest::from_user(&author),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/v1/messages/{}", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_message_requires_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let intruder = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Study group for finals?");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_json(
            &format!("/api/v1/messages/{}", message.id),
            &ActorRequest::from_user(&intruder),
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_MESSAGE_AUTHOR");

    // Message survives the rejected delete
    let response = server
        .get(&format!("/api/v1/messages/{}", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_message_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let commenter = TestUser::unique();
    let liker = TestUser::unique();

    // A message with a comment and likes on both
    let request = CreateMessageRequest::posted_by(&author, "Free pizza at the club fair");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateCommentRequest::posted_by(&commenter, "on my way");
    let response = server
        .post(&format!("/api/v1/messages/{}/comments", message.id), &request)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/messages/{}/like", message.id),
            &ActorRequest::from_user(&liker),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/comments/{}/like", comment.id),
            &ActorRequest::from_user(&liker),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Deleting the message takes the whole thread with it
    let response = server
        .delete_json(
            &format!("/api/v1/messages/{}", message.id),
            &ActorRequest::from_user(&author),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/messages/{}", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/messages/{}/comments", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Like Toggle Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_message_like_alternates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let liker = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Gym buddy wanted");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/messages/{}/like", message.id);

    let response = server.post(&path, &ActorRequest::from_user(&liker)).await.unwrap();
    let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggle.count, 1);
    assert!(toggle.is_active);

    // Second toggle undoes the first
    let response = server.post(&path, &ActorRequest::from_user(&liker)).await.unwrap();
    let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggle.count, 0);
    assert!(!toggle.is_active);
}

#[tokio::test]
async fn test_like_counts_follow_membership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let u1 = TestUser::unique();
    let u2 = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Is the library open tonight?");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/messages/{}/like", message.id);

    let response = server.post(&path, &ActorRequest::from_user(&u1)).await.unwrap();
    let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggle.count, 1);

    let response = server.post(&path, &ActorRequest::from_user(&u2)).await.unwrap();
    let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggle.count, 2);

    let response = server.post(&path, &ActorRequest::from_user(&u1)).await.unwrap();
    let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggle.count, 1);
    assert!(!toggle.is_active);

    // u2's reaction is intact and only u2 sees it as their own
    let response = server
        .get(&format!("/api/v1/messages/{}?viewerId={}", message.id, u2.id))
        .await
        .unwrap();
    let view: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.like_count, 1);
    assert!(view.viewer_has_liked);

    let response = server
        .get(&format!("/api/v1/messages/{}?viewerId={}", message.id, u1.id))
        .await
        .unwrap();
    let view: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!view.viewer_has_liked);
}

#[tokio::test]
async fn test_toggle_like_unknown_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let liker = TestUser::unique();

    let response = server
        .post(
            &format!("/api/v1/messages/{UNKNOWN_ID}/like"),
            &ActorRequest::from_user(&liker),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_toggle_comment_like() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let liker = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Exam schedule is out");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateCommentRequest::posted_by(&author, "finally");
    let response = server
        .post(&format!("/api/v1/messages/{}/comments", message.id), &request)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/comments/{}/like", comment.id),
            &ActorRequest::from_user(&liker),
        )
        .await
        .unwrap();
    let toggle: ToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggle.count, 1);
    assert!(toggle.is_active);

    // The comment listing reflects the liker's view
    let response = server
        .get(&format!(
            "/api/v1/messages/{}/comments?viewerId={}",
            message.id, liker.id
        ))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].like_count, 1);
    assert!(comments[0].viewer_has_liked);
}

// ============================================================================
// Comment Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let commenter = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Campus festival next week");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateCommentRequest::posted_by(&commenter, "can't wait");
    let response = server
        .post(&format!("/api/v1/messages/{}/comments", message.id), &request)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(comment.author_name, commenter.name);
    assert_eq!(comment.body, "can't wait");
    assert_eq!(comment.like_count, 0);

    // The parent message's derived count follows
    let response = server
        .get(&format!("/api/v1/messages/{}", message.id))
        .await
        .unwrap();
    let view: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.comment_count, 1);
}

#[tokio::test]
async fn test_comment_on_missing_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let commenter = TestUser::unique();

    let request = CreateCommentRequest::posted_by(&commenter, "hello?");
    let response = server
        .post(&format!("/api/v1/messages/{UNKNOWN_ID}/comments"), &request)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(err.error.code, "UNKNOWN_PARENT_MESSAGE");
}

#[tokio::test]
async fn test_list_comments_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let commenter = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Who took notes in physics?");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for body in ["first", "second"] {
        let request = CreateCommentRequest::posted_by(&commenter, body);
        let response = server
            .post(&format!("/api/v1/messages/{}/comments", message.id), &request)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/messages/{}/comments", message.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].body, "second");
    assert_eq!(comments[1].body, "first");
}

#[tokio::test]
async fn test_delete_comment_requires_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let commenter = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Dorm wifi is down again");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateCommentRequest::posted_by(&commenter, "same here");
    let response = server
        .post(&format!("/api/v1/messages/{}/comments", message.id), &request)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The message author is not the comment author
    let response = server
        .delete_json(
            &format!("/api/v1/messages/{}/comments/{}", message.id, comment.id),
            &ActorRequest::from_user(&author),
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_COMMENT_AUTHOR");

    let response = server
        .get(&format!("/api/v1/messages/{}/comments", message.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
}

#[tokio::test]
async fn test_delete_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::unique();
    let commenter = TestUser::unique();

    let request = CreateMessageRequest::posted_by(&author, "Ride share to the airport?");
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateCommentRequest::posted_by(&commenter, "when?");
    let response = server
        .post(&format!("/api/v1/messages/{}/comments", message.id), &request)
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_json(
            &format!("/api/v1/messages/{}/comments/{}", message.id, comment.id),
            &ActorRequest::from_user(&commenter),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/messages/{}/comments", message.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.is_empty());

    let response = server
        .get(&format!("/api/v1/messages/{}", message.id))
        .await
        .unwrap();
    let view: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.comment_count, 0);
}

// ============================================================================
// Meal Rating Tests
// ============================================================================

#[tokio::test]
async fn test_rate_meal_upsert() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();
    let date = unique_meal_date();
    let path = format!("/api/v1/meals/{date}/rating");

    let response = server.put(&path, &RateMealRequest::from_user(&user, true)).await.unwrap();
    let stats: MealRatingStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.like_count, 1);
    assert_eq!(stats.dislike_count, 0);

    // Re-rating flips the verdict in place, never adds a second row
    let response = server.put(&path, &RateMealRequest::from_user(&user, false)).await.unwrap();
    let stats: MealRatingStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.like_count, 0);
    assert_eq!(stats.dislike_count, 1);
}

#[tokio::test]
async fn test_remove_meal_rating() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();
    let date = unique_meal_date();
    let path = format!("/api/v1/meals/{date}/rating");

    let response = server.put(&path, &RateMealRequest::from_user(&user, true)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_json(&path, &ActorRequest::from_user(&user))
        .await
        .unwrap();
    let stats: MealRatingStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.like_count, 0);
    assert_eq!(stats.dislike_count, 0);

    // Withdrawing twice fails
    let response = server
        .delete_json(&path, &ActorRequest::from_user(&user))
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_MEAL_RATING");
}

#[tokio::test]
async fn test_meal_stats_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let date = unique_meal_date();
    let path = format!("/api/v1/meals/{date}/rating");

    for liked in [true, true, false] {
        let user = TestUser::unique();
        let response = server.put(&path, &RateMealRequest::from_user(&user, liked)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/v1/meals/ratings").await.unwrap();
    let all: Vec<MealRatingStatsResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = all
        .iter()
        .find(|s| s.meal_date == date.to_string())
        .expect("rated date missing from stats listing");
    assert_eq!(entry.like_count, 2);
    assert_eq!(entry.dislike_count, 1);
}

#[tokio::test]
async fn test_get_user_meal_ratings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let (a, b) = (unique_meal_date(), unique_meal_date());
    let (earlier, later) = if a < b { (a, b) } else { (b, a) };

    let response = server
        .put(
            &format!("/api/v1/meals/{earlier}/rating"),
            &RateMealRequest::from_user(&user, true),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/meals/{later}/rating"),
            &RateMealRequest::from_user(&user, false),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/users/{}/meal-ratings", user.id))
        .await
        .unwrap();
    let ratings: Vec<MealRatingResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ratings.len(), 2);
    // Newest date first
    assert_eq!(ratings[0].meal_date, later.to_string());
    assert!(!ratings[0].liked);
    assert_eq!(ratings[1].meal_date, earlier.to_string());
}

#[tokio::test]
async fn test_purge_removes_only_past_dates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let yesterday = Utc::now().date_naive().pred_opt().unwrap();
    let future = unique_meal_date();

    let response = server
        .put(
            &format!("/api/v1/meals/{yesterday}/rating"),
            &RateMealRequest::from_user(&user, true),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/meals/{future}/rating"),
            &RateMealRequest::from_user(&user, true),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete("/api/v1/meals/ratings/history").await.unwrap();
    let purge: PurgeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(purge.purged >= 1);

    // Only the future rating survives
    let response = server
        .get(&format!("/api/v1/users/{}/meal-ratings", user.id))
        .await
        .unwrap();
    let ratings: Vec<MealRatingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].meal_date, future.to_string());
}

#[tokio::test]
async fn test_rate_meal_invalid_date() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::unique();

    let response = server
        .put(
            "/api/v1/meals/not-a-date/rating",
            &RateMealRequest::from_user(&user, true),
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Topic Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_topic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateTopicRequest::unique();
    let response = server.post("/api/v1/topics", &request).await.unwrap();
    let created: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.title, request.title);
    assert_eq!(created.position, 0);

    let response = server
        .get(&format!("/api/v1/topics/{}", created.id))
        .await
        .unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(topic.id, created.id);
    assert_eq!(topic.title, request.title);
}

#[tokio::test]
async fn test_update_topic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateTopicRequest::at_position(7);
    let response = server.post("/api/v1/topics", &request).await.unwrap();
    let created: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Title-only patch leaves the position alone
    let patch = UpdateTopicRequest {
        title: Some("Budget review".to_string()),
        position: None,
    };
    let response = server
        .patch(&format!("/api/v1/topics/{}", created.id), &patch)
        .await
        .unwrap();
    let updated: TopicResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.title, "Budget review");
    assert_eq!(updated.position, 7);
}

#[tokio::test]
async fn test_delete_topic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateTopicRequest::unique();
    let response = server.post("/api/v1/topics", &request).await.unwrap();
    let created: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/topics/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/v1/topics/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reorder_topics() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A distinct position band keeps concurrent tests out of the way
    let base = (unique_suffix() as i32) * 100;
    let mut created: Vec<TopicResponse> = Vec::new();
    for offset in 0..3 {
        let request = CreateTopicRequest::at_position(base + offset);
        let response = server.post("/api/v1/topics", &request).await.unwrap();
        created.push(assert_json(response, StatusCode::CREATED).await.unwrap());
    }

    // Swap the first and last topics in one call
    let positions = vec![
        TopicPosition {
            id: created[2].id.clone(),
            position: base,
        },
        TopicPosition {
            id: created[0].id.clone(),
            position: base + 2,
        },
    ];
    let response = server.patch("/api/v1/topics/positions", &positions).await.unwrap();
    let all: Vec<TopicResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let find = |id: &str| {
        all.iter()
            .find(|t| t.id == id)
            .expect("reordered topic missing from listing")
    };
    assert_eq!(find(&created[2].id).position, base);
    assert_eq!(find(&created[1].id).position, base + 1);
    assert_eq!(find(&created[0].id).position, base + 2);

    // The listing comes back ordered by position
    let index = |id: &str| all.iter().position(|t| t.id == id).unwrap();
    assert!(index(&created[2].id) < index(&created[1].id));
    assert!(index(&created[1].id) < index(&created[0].id));
}
