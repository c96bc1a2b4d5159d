//!
//! Module testing if all paths are protected by auth middleware.
//!
//! Any request should return 401 if URI and method is correct, 404 otherwise
//!
mod common;
use common::*;

use bson::oid::ObjectId;
use reqwest::{Client, Method, StatusCode};

async fn assert_unauthorized(method: Method, path: &str) {
    init_env();

    let client = Client::new();

    let response = client.request(method, url(path)).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
}

#[tokio::test]
async fn get_profile() {
    assert_unauthorized(Method::GET, "/profile").await;
}

#[tokio::test]
async fn get_all_users() {
    assert_unauthorized(Method::GET, "/getAllUsers").await;
}

#[tokio::test]
async fn get_user() {
    let path = format!("/getUser/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::GET, &path).await;
}

#[tokio::test]
async fn put_user() {
    let path = format!("/updateUser/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::PUT, &path).await;
}

#[tokio::test]
async fn post_uploads() {
    assert_unauthorized(Method::POST, "/upload-by-link").await;
    assert_unauthorized(Method::POST, "/upload").await;
}

#[tokio::test]
async fn admin_movies() {
    assert_unauthorized(Method::POST, "/adminMovies").await;
    assert_unauthorized(Method::GET, "/adminMovies").await;
    assert_unauthorized(Method::PUT, "/adminMovies").await;
    let path = format!("/adminMovies/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::DELETE, &path).await;
}

#[tokio::test]
async fn admin_theatres() {
    assert_unauthorized(Method::POST, "/adminTheatres").await;
    assert_unauthorized(Method::GET, "/adminTheatres").await;
    assert_unauthorized(Method::PUT, "/adminTheatres").await;
    let path = format!("/adminTheatres/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::DELETE, &path).await;
}

#[tokio::test]
async fn admin_showtimes() {
    assert_unauthorized(Method::POST, "/adminShowtimes").await;
    assert_unauthorized(Method::GET, "/adminShowtimes").await;
    assert_unauthorized(Method::PUT, "/adminShowtimes").await;
    assert_unauthorized(Method::GET, "/adminShowtimes/check").await;
    let path = format!("/adminShowtimes/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::DELETE, &path).await;
}

#[tokio::test]
async fn find_showtimes() {
    assert_unauthorized(Method::GET, "/findShowtimes").await;
}

#[tokio::test]
async fn admin_list() {
    assert_unauthorized(Method::POST, "/createAdminList").await;
    assert_unauthorized(Method::GET, "/adminList").await;
    let path = format!("/adminList/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::POST, &path).await;
    assert_unauthorized(Method::DELETE, &path).await;
}

#[tokio::test]
async fn tickets() {
    assert_unauthorized(Method::POST, "/bookTicket").await;
    assert_unauthorized(Method::GET, "/myTickets").await;
    let path = format!("/tickets/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::DELETE, &path).await;
    assert_unauthorized(Method::POST, "/sendBookingConfirmationEmail").await;
    assert_unauthorized(Method::POST, "/sendCancellationEmail").await;
}

#[tokio::test]
async fn invalid_token() {
    init_env();

    let client = Client::new();

    let response = client
        .get(url("/profile"))
        .bearer_auth("not.a.token")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_non_existent_uri() {
    init_env();

    let client = Client::new();

    let response = client
        .get(url("/this-uri-does-not-exist"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
