//! # 루트(헬스체크) 핸들러
//!
//! - `GET /` → `{ "Hello": "World" }`
//!
//! 서버가 떠 있는지 확인하는 용도로 쓰입니다. DB에 접근하지 않습니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /` — 고정된 JSON을 반환하며 실패하지 않습니다.
pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn root_says_hello() {
        let app = test_app().await;

        let (status, data) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, json!({ "Hello": "World" }));
    }
}
