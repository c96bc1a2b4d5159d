mod common;
pub use common::*;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

#[tokio::test]
async fn max_content_length_http() {
    init_env();

    // sending too large content should result in 413

    let max_content_len: usize = std::env::var("CINEBOOK_API_MAX_HTTP_CONTENT_LEN")
        .unwrap()
        .parse()
        .unwrap();

    // content does not matter, it should be rejected because of its size
    let content = "0".repeat(max_content_len + 1);

    let client = Client::new();

    let response = client
        .post(url("/register"))
        .header(CONTENT_TYPE, "application/json")
        .body(content)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
