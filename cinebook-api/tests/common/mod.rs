#![allow(dead_code)]

use bson::oid::ObjectId;
use jwt_auth::test::create_jwt;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub const PASSWORD: &str = "secret-password";

pub struct TestUser {
    pub id: ObjectId,
    pub email: String,
    pub token: String,
}

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("CINEBOOK_API_BIND_ADDRESS").unwrap()
}

pub fn url(path: &str) -> String {
    format!("http://{}{path}", address())
}

pub fn unique_email() -> String {
    format!("user_{}@example.com", Uuid::new_v4().simple())
}

pub fn create_user_jwt(user_id: ObjectId, email: &str) -> String {
    let jwt_algorithms = std::env::var("CINEBOOK_API_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("CINEBOOK_API_JWT_ENCODE_KEY").unwrap();

    create_jwt(user_id, email, jwt_algorithms, jwt_key)
}

pub async fn post_json(client: &Client, path: &str, token: Option<&str>, body: Value) -> reqwest::Response {
    let mut request = client
        .post(url(path))
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_string());
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    request.send().await.unwrap()
}

pub async fn body(response: reqwest::Response) -> Value {
    let bytes = response.bytes().await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn id_of(value: &Value) -> String {
    value.get("id").unwrap().as_str().unwrap().to_string()
}

pub async fn register_customer(client: &Client) -> TestUser {
    let email = unique_email();
    let response = post_json(
        client,
        "/register",
        None,
        json!({"name": "Customer", "email": email, "password": PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = ObjectId::parse_str(id_of(&body(response).await)).unwrap();

    TestUser {
        id,
        token: create_user_jwt(id, &email),
        email,
    }
}

///
/// Logs in first of the configured super admin emails, registering it when needed
///
pub async fn super_admin(client: &Client) -> TestUser {
    let email = std::env::var("CINEBOOK_API_SUPER_ADMIN_EMAILS")
        .unwrap()
        .split(',')
        .next()
        .unwrap()
        .trim()
        .to_lowercase();

    let response = post_json(
        client,
        "/register",
        None,
        json!({"name": "Super admin", "email": email, "password": PASSWORD}),
    )
    .await;
    assert!([StatusCode::CREATED, StatusCode::UNPROCESSABLE_ENTITY].contains(&response.status()));

    let response = post_json(
        client,
        "/login",
        None,
        json!({"email": email, "password": PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = body(response).await;
    assert_eq!(user["role"], "SuperAdmin");
    let id = ObjectId::parse_str(id_of(&user)).unwrap();

    TestUser {
        id,
        token: create_user_jwt(id, &email),
        email,
    }
}

pub async fn register_admin(client: &Client) -> TestUser {
    let user = register_customer(client).await;
    let super_admin = super_admin(client).await;

    let response = client
        .put(url(&format!("/updateUser/{}", user.id.to_hex())))
        .bearer_auth(&super_admin.token)
        .header(CONTENT_TYPE, "application/json")
        .body(json!({"role": "Admin"}).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    user
}

///
/// Creates movie, theatre with 5 rows and 10 columns and a showtime at 18:30
///
/// ### Returns
/// id of the showtime
///
pub async fn create_showtime(client: &Client, admin: &TestUser, ticket_price: i64) -> String {
    let response = post_json(
        client,
        "/adminMovies",
        Some(&admin.token),
        json!({"title": "Arrival", "photos": ["poster.jpg"], "length": 116}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let movie_id = id_of(&body(response).await);

    let response = post_json(
        client,
        "/adminTheatres",
        Some(&admin.token),
        json!({
            "theatre_name": "Grand",
            "city": "Pune",
            "ticket_price": ticket_price,
            "rows": 5,
            "cols": 10
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let theatre_id = id_of(&body(response).await);

    let response = post_json(
        client,
        "/adminShowtimes",
        Some(&admin.token),
        json!({
            "movie_id": movie_id,
            "theatre_id": theatre_id,
            "ticket_price": ticket_price,
            "show_date": "2030-05-17",
            "daytime": "18:30"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    id_of(&body(response).await)
}
