//! 사용자(User) 라우트 핸들러: `GET /users/`, `POST /users/`

use crate::{db, error::AppError, extract::AppJson, models::*, AppState};
use axum::{extract::State, Json};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let mut session = state.db.begin().await?;
    let users = db::list_users(&mut *session).await?;
    session.commit().await?;
    Ok(Json(users))
}

/// 비밀번호(`pswd`)는 받은 그대로 저장됩니다.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<UserRequest>,
) -> Result<Json<User>, AppError> {
    let mut session = state.db.begin().await?;
    let user = db::insert_user(&mut *session, &req).await?;
    session.commit().await?;

    tracing::debug!(user_id = user.user_id, "Created user");
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn create_user_with_explicit_id() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({ "user_id": 1, "pswd": "12345678" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, json!({ "user_id": 1, "pswd": "12345678" }));
    }

    #[tokio::test]
    async fn password_alias_is_accepted() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({ "password": "secret" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["pswd"], "secret");
        assert_eq!(data["user_id"], 1);
    }

    #[tokio::test]
    async fn duplicate_user_id_conflicts() {
        let app = test_app().await;
        let body = json!({ "user_id": 7, "pswd": "a" });

        let (status, _) = send(&app, Method::POST, "/users/", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);

        let (status, data) = send(&app, Method::POST, "/users/", Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(data["detail"].is_string());

        let (_, list) = send(&app, Method::GET, "/users/", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_users_starts_empty() {
        let app = test_app().await;

        let (status, data) = send(&app, Method::GET, "/users/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data, json!([]));
    }

    #[tokio::test]
    async fn zero_padded_user_id_is_coerced() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({ "user_id": "00001", "pswd": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["user_id"], 1);
    }
}
