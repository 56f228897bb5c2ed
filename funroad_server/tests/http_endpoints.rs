// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks of the HTTP surface over a real socket.

use std::time::Duration;

use chrono::TimeZone;
use funroad_catalog::{Category, JsonSource, Slug, StaticSource};
use funroad_server::{AppState, FixedInfo, ProcessInfo, build_router};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn send_raw(addr: std::net::SocketAddr, request: &str) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, body.to_string())
}

async fn get(addr: std::net::SocketAddr, path: &str) -> (u16, String) {
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    send_raw(addr, &request).await
}

async fn spawn(state: AppState) -> std::net::SocketAddr {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

fn slug(s: &str) -> Slug {
    Slug::new(s).expect("valid slug")
}

#[tokio::test]
async fn health_reports_status_clock_uptime_and_environment() {
    let addr = spawn(AppState::new(
        ProcessInfo::new("staging"),
        StaticSource::new(Vec::new()),
    ))
    .await;

    let (status, body) = get(addr, "/api/health").await;
    assert_eq!(status, 200);
    let health: serde_json::Value = serde_json::from_str(&body).expect("health json");
    let object = health.as_object().expect("health object");
    assert_eq!(object.len(), 4, "unexpected keys in {body}");
    assert_eq!(health["status"], "ok");
    assert_eq!(health["environment"], "staging");
    assert!(health["uptime"].as_f64().expect("numeric uptime") >= 0.0);
    let timestamp = health["timestamp"].as_str().expect("timestamp string");
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("rfc3339 timestamp");
    assert!(timestamp.ends_with('Z'), "timestamp not in UTC: {timestamp}");
}

#[tokio::test]
async fn health_uses_the_injected_clock() {
    let addr = spawn(AppState::new(
        FixedInfo {
            now: chrono::Utc
                .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
                .single()
                .expect("valid time"),
            uptime: Duration::from_secs(90),
            environment: "production".to_owned(),
        },
        StaticSource::new(Vec::new()),
    ))
    .await;

    let (status, body) = get(addr, "/api/health").await;
    assert_eq!(status, 200);
    let health: serde_json::Value = serde_json::from_str(&body).expect("health json");
    assert_eq!(
        health,
        serde_json::json!({
            "status": "ok",
            "timestamp": "2026-01-02T03:04:05.000Z",
            "uptime": 90.0,
            "environment": "production",
        })
    );
}

#[tokio::test]
async fn categories_are_listed_in_display_order() {
    let categories = vec![
        Category::new("1", "Music", slug("music"))
            .with_color("#FFB347")
            .with_subcategories(vec![
                Category::new("11", "Guitar", slug("guitar")),
                Category::new("12", "Drums", slug("drums")),
            ]),
        Category::new("2", "Books", slug("books")),
    ];
    let addr = spawn(AppState::new(
        ProcessInfo::new("test"),
        StaticSource::new(categories),
    ))
    .await;

    let (status, body) = get(addr, "/api/categories").await;
    assert_eq!(status, 200);
    let listed: Vec<Category> = serde_json::from_str(&body).expect("categories json");
    let slugs: Vec<_> = listed.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["music", "books"]);
    assert_eq!(listed[0].accent(), Some("#FFB347"));
    let children: Vec<_> = listed[0]
        .subcategories
        .iter()
        .map(|c| c.slug.as_str())
        .collect();
    assert_eq!(children, ["guitar", "drums"]);
    assert!(listed[1].is_leaf());
}

#[tokio::test]
async fn broken_category_document_is_a_server_error() {
    let addr = spawn(AppState::new(
        ProcessInfo::new("test"),
        JsonSource::new(b"{not json".to_vec()),
    ))
    .await;

    let (status, body) = get(addr, "/api/categories").await;
    assert_eq!(status, 500);
    let error: serde_json::Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"]["code"], "catalog_unavailable");
}

#[tokio::test]
async fn duplicate_sibling_slugs_are_rejected() {
    let addr = spawn(AppState::new(
        ProcessInfo::new("test"),
        JsonSource::new(
            br#"[{"name":"Music","slug":"music"},{"name":"Musik","slug":"music"}]"#.to_vec(),
        ),
    ))
    .await;

    let (status, body) = get(addr, "/api/categories").await;
    assert_eq!(status, 500);
    assert!(body.contains("duplicate slug"), "body: {body}");
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let addr = spawn(AppState::new(
        ProcessInfo::new("test"),
        StaticSource::new(Vec::new()),
    ))
    .await;

    let (status, _) = get(addr, "/api/products").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn null_category_document_lists_nothing() {
    let addr = spawn(AppState::new(
        ProcessInfo::new("test"),
        JsonSource::new(b"null".to_vec()),
    ))
    .await;

    let (status, body) = get(addr, "/api/categories").await;
    assert_eq!(status, 200);
    assert_eq!(body, "[]");
}

fn get_with_body(addr: std::net::SocketAddr, path: &str, body: &str) -> String {
    format!(
        "GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\
         Content-Length: {}\r\n\r\n{body}",
        body.len()
    )
}

#[tokio::test]
async fn oversize_bodies_are_rejected() {
    let addr = spawn(
        AppState::new(ProcessInfo::new("test"), StaticSource::new(Vec::new())).with_body_limit(8),
    )
    .await;

    let oversize = get_with_body(addr, "/api/health", &"x".repeat(4096));
    let (status, body) = send_raw(addr, &oversize).await;
    assert_eq!(status, 413);
    let error: serde_json::Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"]["code"], "payload_too_large");

    let (status, _) = send_raw(addr, &get_with_body(addr, "/api/categories", "12345678")).await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn oversize_chunked_bodies_are_rejected() {
    let addr = spawn(
        AppState::new(ProcessInfo::new("test"), StaticSource::new(Vec::new())).with_body_limit(8),
    )
    .await;

    let request = format!(
        "GET /api/health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\
         Transfer-Encoding: chunked\r\n\r\n10\r\n0123456789abcdef\r\n0\r\n\r\n"
    );
    let (status, _) = send_raw(addr, &request).await;
    assert_eq!(status, 413);

    let request = format!(
        "GET /api/health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\
         Transfer-Encoding: chunked\r\n\r\n4\r\nabcd\r\n0\r\n\r\n"
    );
    let (status, _) = send_raw(addr, &request).await;
    assert_eq!(status, 200);
}
