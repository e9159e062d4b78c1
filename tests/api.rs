mod helpers;

use helpers::setup::{seed_user, spawn_app};
use serde_json::{json, Value};

async fn post_json(
    client: &reqwest::Client,
    url: &str,
    session_token: &str,
    body: Value,
) -> reqwest::Response {
    client
        .post(url)
        .bearer_auth(session_token)
        .json(&body)
        .send()
        .await
        .expect("Expected request to complete")
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, address) = spawn_app().await;
    let res = reqwest::get(format!("{}/", address))
        .await
        .expect("Expected status request to complete");
    assert!(res.status().is_success());
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].is_string());
}

#[actix_web::main]
#[test]
async fn test_requests_without_credentials_are_rejected() {
    let (_, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/courses", address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = client
        .get(format!("{}/courses", address))
        .bearer_auth("not-a-session")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);
}

// User A shares "Algorithms" with a Midterm exam and the resulting
// token serves the expected VEVENT.
#[actix_web::main]
#[test]
async fn test_share_token_serves_the_course_feed() {
    let (ctx, address) = spawn_app().await;
    seed_user(&ctx, "a@itu.dk", "session-a").await;
    let client = reqwest::Client::new();

    let res = post_json(
        &client,
        &format!("{}/courses", address),
        "session-a",
        json!({"name": "Algorithms", "color": "#4CAF50"}),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201);
    let course: Value = res.json().await.unwrap();
    let course_id = course["course"]["id"].as_str().unwrap().to_string();

    let res = post_json(
        &client,
        &format!("{}/events", address),
        "session-a",
        json!({
            "courseId": course_id,
            "title": "Midterm",
            "date": "2026-03-10",
            "type": "exam"
        }),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201);

    let res = post_json(
        &client,
        &format!("{}/courses/{}/share", address, course_id),
        "session-a",
        json!({}),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201);
    let share: Value = res.json().await.unwrap();
    let token = share["share"]["shareToken"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 32);

    let res = reqwest::get(format!("{}/feeds/course?token={}", address, token))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    assert!(res
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/calendar"));
    let feed = res.text().await.unwrap();
    assert!(feed.contains("DTSTART;VALUE=DATE:20260310"));
    assert!(feed.contains("SUMMARY:Algorithms: Midterm"));
    assert_eq!(feed.matches("BEGIN:VEVENT").count(), 1);
}

// User B subscribes live, hits the read-only wall, unsubscribes, and
// A's data survives untouched.
#[actix_web::main]
#[test]
async fn test_live_subscription_is_read_only_and_reversible() {
    let (ctx, address) = spawn_app().await;
    seed_user(&ctx, "a@itu.dk", "session-a").await;
    seed_user(&ctx, "b@itu.dk", "session-b").await;
    let client = reqwest::Client::new();

    let res = post_json(
        &client,
        &format!("{}/courses", address),
        "session-a",
        json!({"name": "Algorithms", "color": "#4CAF50"}),
    )
    .await;
    let course: Value = res.json().await.unwrap();
    let course_id = course["course"]["id"].as_str().unwrap().to_string();

    let res = post_json(
        &client,
        &format!("{}/events", address),
        "session-a",
        json!({
            "courseId": course_id,
            "title": "Midterm",
            "date": "2026-03-10",
            "type": "exam"
        }),
    )
    .await;
    let event: Value = res.json().await.unwrap();
    let event_id = event["event"]["id"].as_str().unwrap().to_string();

    let res = post_json(
        &client,
        &format!("{}/courses/{}/share", address, course_id),
        "session-a",
        json!({}),
    )
    .await;
    let share: Value = res.json().await.unwrap();
    let token = share["share"]["shareToken"].as_str().unwrap();

    let res = post_json(
        &client,
        &format!("{}/subscriptions", address),
        "session-b",
        json!({ "token": token }),
    )
    .await;
    assert_eq!(res.status().as_u16(), 201);
    let subscription: Value = res.json().await.unwrap();
    let subscription_id = subscription["subscription"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // B's unified list shows the subscribed entry
    let res = client
        .get(format!("{}/courses", address))
        .bearer_auth("session-b")
        .send()
        .await
        .unwrap();
    let courses: Value = res.json().await.unwrap();
    let entries = courses["courses"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Algorithms");
    assert_eq!(entries[0]["isSubscribed"], true);

    // Read-only wall
    let res = client
        .delete(format!("{}/events/{}", address, event_id))
        .bearer_auth("session-b")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 403);

    // Duplicate subscribe is a conflict
    let res = post_json(
        &client,
        &format!("{}/subscriptions", address),
        "session-b",
        json!({ "token": token }),
    )
    .await;
    assert_eq!(res.status().as_u16(), 409);

    // Unsubscribe empties B's list and leaves A's data alone
    let res = client
        .delete(format!("{}/subscriptions/{}", address, subscription_id))
        .bearer_auth("session-b")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let res = client
        .get(format!("{}/courses", address))
        .bearer_auth("session-b")
        .send()
        .await
        .unwrap();
    let courses: Value = res.json().await.unwrap();
    assert!(courses["courses"].as_array().unwrap().is_empty());

    let res = client
        .get(format!("{}/courses", address))
        .bearer_auth("session-a")
        .send()
        .await
        .unwrap();
    let courses: Value = res.json().await.unwrap();
    assert_eq!(courses["courses"].as_array().unwrap().len(), 1);
    let res = client
        .get(format!("{}/events", address))
        .bearer_auth("session-a")
        .send()
        .await
        .unwrap();
    let events: Value = res.json().await.unwrap();
    assert_eq!(events["events"].as_array().unwrap().len(), 1);
}

#[actix_web::main]
#[test]
async fn test_feed_endpoint_statuses() {
    let (_, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = reqwest::get(format!("{}/feeds/course", address)).await.unwrap();
    assert_eq!(res.status().as_u16(), 400);

    let res = reqwest::get(format!(
        "{}/feeds/course?token=nosuchtoken00000000000000000000a",
        address
    ))
    .await
    .unwrap();
    assert_eq!(res.status().as_u16(), 404);

    let res = client
        .post(format!("{}/feeds/course?token=x", address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 405);

    // Plain OPTIONS without preflight headers still answers 204
    let res = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/feeds/course?token=x", address),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 204);

    let res = reqwest::get(format!("{}/feeds/combined?token=unknown", address))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);
}

// A failed test-send answers with the provider's own message in a
// JSON body instead of a generic opaque 500.
#[actix_web::main]
#[test]
async fn test_send_failure_carries_the_provider_message() {
    let (ctx, address) = spawn_app().await;
    seed_user(&ctx, "a@itu.dk", "session-a").await;
    let client = reqwest::Client::new();

    // No email provider is configured in the test environment, so
    // the delivery itself fails after the request validates
    let res = post_json(
        &client,
        &format!("{}/notifications/test", address),
        "session-a",
        json!({ "channel": "email" }),
    )
    .await;
    assert_eq!(res.status().as_u16(), 500);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("provider"));
}

#[actix_web::main]
#[test]
async fn test_reminder_batch_endpoint_requires_the_cron_secret() {
    let (ctx, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/notifications/send", address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = client
        .post(format!("{}/notifications/send", address))
        .bearer_auth(&ctx.config.cron_secret)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["sent"], 0);
    assert!(body["errors"].as_array().unwrap().is_empty());
}
