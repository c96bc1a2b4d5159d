mod common;
pub use common::*;

use bson::oid::ObjectId;
use reqwest::{
    header::{CONTENT_TYPE, SET_COOKIE},
    Client, StatusCode,
};
use serde_json::{json, Value};
use serial_test::{parallel, serial};

// AUTH

#[tokio::test]
#[parallel]
async fn register_login_profile() {
    init_env();

    let client = Client::new();
    let email = unique_email();

    let response = post_json(
        &client,
        "/register",
        None,
        json!({"name": "Jane", "email": email, "password": PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered = body(response).await;
    assert_eq!(registered["role"], "Customer");
    assert!(registered.get("password_hash").is_none());

    // registering the same email again is rejected
    let response = post_json(
        &client,
        "/register",
        None,
        json!({"name": "Jane", "email": email.to_uppercase(), "password": PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_json(
        &client,
        "/login",
        None,
        json!({"email": email, "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        &client,
        "/login",
        None,
        json!({"email": email, "password": PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.contains("HttpOnly"));
    let token = cookie
        .split(';')
        .next()
        .unwrap()
        .strip_prefix("token=")
        .unwrap()
        .to_string();

    // session cookie authorizes next requests
    let response = client
        .get(url("/profile"))
        .header("Cookie", format!("token={token}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body(response).await;
    assert_eq!(profile["id"], registered["id"]);
    assert_eq!(profile["email"], email.as_str());

    let response = client.post(url("/logout")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
#[parallel]
async fn login_unknown_email() {
    init_env();

    let client = Client::new();

    let response = post_json(
        &client,
        "/login",
        None,
        json!({"email": unique_email(), "password": PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[parallel]
async fn update_other_user_by_customer() {
    init_env();

    let client = Client::new();
    let user = register_customer(&client).await;
    let other = register_customer(&client).await;

    let response = client
        .put(url(&format!("/updateUser/{}", other.id.to_hex())))
        .bearer_auth(&user.token)
        .header(CONTENT_TYPE, "application/json")
        .body(json!({"name": "Changed"}).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// CATALOG

#[tokio::test]
#[parallel]
async fn create_movie_by_customer() {
    init_env();

    let client = Client::new();
    let customer = register_customer(&client).await;

    let response = post_json(
        &client,
        "/adminMovies",
        Some(&customer.token),
        json!({"title": "Arrival"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[parallel]
async fn update_movie_of_other_admin() {
    init_env();

    let client = Client::new();
    let owner = register_admin(&client).await;
    let other = register_admin(&client).await;

    let response = post_json(
        &client,
        "/adminMovies",
        Some(&owner.token),
        json!({"title": "Arrival"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let movie_id = id_of(&body(response).await);

    let response = client
        .put(url("/adminMovies"))
        .bearer_auth(&other.token)
        .header(CONTENT_TYPE, "application/json")
        .body(json!({"id": movie_id, "title": "Changed"}).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // movie is unchanged and publicly readable
    let response = client
        .get(url(&format!("/adminMovies/{movie_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await["title"], "Arrival");

    let response = client
        .delete(url(&format!("/adminMovies/{}", ObjectId::new().to_hex())))
        .bearer_auth(&owner.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[parallel]
async fn get_movie_invalid_id() {
    init_env();

    let client = Client::new();

    let response = client
        .get(url("/adminMovies/not-an-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body(response).await.get("error").is_some());
}

#[tokio::test]
#[parallel]
async fn search_empty_query() {
    init_env();

    let client = Client::new();

    let response = client.get(url("/search?query=")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await, json!([]));
}

// BOOKING

async fn book(client: &Client, user: &TestUser, showtime_id: &str, seat_ids: &[&str]) -> reqwest::Response {
    post_json(
        client,
        "/bookTicket",
        Some(&user.token),
        json!({
            "showtime_id": showtime_id,
            "time_slot": "18:30",
            "seat_ids": seat_ids,
        }),
    )
    .await
}

async fn booked_seats(client: &Client, showtime_id: &str) -> Vec<String> {
    let response = client
        .get(url(&format!(
            "/bookedSeats?showtime_id={showtime_id}&time_slot=18:30"
        )))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let seats = body(response).await;

    serde_json::from_value(seats["seat_ids"].clone()).unwrap()
}

#[tokio::test]
#[parallel]
async fn book_and_cancel_ticket() {
    init_env();

    let client = Client::new();
    let admin = register_admin(&client).await;
    let customer = register_customer(&client).await;
    let other = register_customer(&client).await;
    let showtime_id = create_showtime(&client, &admin, 200).await;

    let response = book(&client, &customer, &showtime_id, &["A1", "A2"]).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = body(response).await;
    assert_eq!(ticket["total_price"], 400);
    let ticket_id = id_of(&ticket);

    let mut seats = booked_seats(&client, &showtime_id).await;
    seats.sort();
    assert_eq!(seats, vec!["A1", "A2"]);

    // seat overlapping with existing ticket
    let response = book(&client, &other, &showtime_id, &["A2", "A3"]).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = client
        .get(url("/myTickets"))
        .bearer_auth(&customer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tickets = body(response).await;
    let tickets = tickets.as_array().unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0]["movie_title"], "Arrival");
    assert_eq!(tickets[0]["poster"], "poster.jpg");
    assert_eq!(tickets[0]["city"], "Pune");

    // other users cannot see the ticket
    let response = client
        .delete(url(&format!("/tickets/{ticket_id}")))
        .bearer_auth(&other.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(url(&format!("/tickets/{ticket_id}")))
        .bearer_auth(&customer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(booked_seats(&client, &showtime_id).await.is_empty());

    let response = client
        .delete(url(&format!("/tickets/{ticket_id}")))
        .bearer_auth(&customer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // freed seats can be booked again
    let response = book(&client, &other, &showtime_id, &["A2", "A3"]).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
#[parallel]
async fn book_invalid_requests() {
    init_env();

    let client = Client::new();
    let admin = register_admin(&client).await;
    let customer = register_customer(&client).await;
    let showtime_id = create_showtime(&client, &admin, 150).await;

    let response = book(&client, &customer, &showtime_id, &[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = book(&client, &customer, &showtime_id, &["Z99"]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        &client,
        "/bookTicket",
        Some(&customer.token),
        json!({
            "showtime_id": showtime_id,
            "time_slot": "18:30",
            "seat_ids": ["B1"],
            "ticket_price": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = book(&client, &customer, &ObjectId::new().to_hex(), &["A1"]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(url(&format!("/bookedSeats?showtime_id={showtime_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ADMIN REQUESTS

#[tokio::test]
#[serial]
async fn admin_request_list_set_semantics() {
    init_env();

    let client = Client::new();
    let customer = register_customer(&client).await;
    let super_admin = super_admin(&client).await;
    let path = format!("/adminList/{}", customer.id.to_hex());

    let response = post_json(&client, "/createAdminList", Some(&customer.token), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    for _ in 0..2 {
        let response = post_json(&client, &path, Some(&customer.token), json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = client
        .get(url("/adminList"))
        .bearer_auth(&customer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = client
        .get(url("/adminList"))
        .bearer_auth(&super_admin.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body(response).await;
    let occurrences = list["user_ids"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|id| **id == Value::String(customer.id.to_hex()))
        .count();
    assert_eq!(occurrences, 1);

    let response = client
        .delete(url(&path))
        .bearer_auth(&super_admin.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body(response).await;
    assert!(!list["user_ids"]
        .as_array()
        .unwrap()
        .contains(&Value::String(customer.id.to_hex())));

    let response = client
        .post(url("/adminList/not-an-id"))
        .bearer_auth(&customer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
