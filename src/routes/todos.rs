//! # 할 일(Todo) 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /todos/ | `list_todos` | 전체 할 일 목록 (JSON 배열) |
//! | POST | /todos/ | `create_todo` | 새 할 일 생성 |
//! | PUT | /todos/{task_id} | `update_todo` | 할 일 전체 교체 |
//! | DELETE | /todos/{task_id} | `delete_todo` | 할 일 삭제 |
//!
//! 모든 핸들러는 같은 순서를 따릅니다:
//! 세션 열기 → 쿼리 하나 실행 → 커밋 → JSON 응답.
//! 중간에 `?`로 빠져나가면 세션이 드롭되면서 롤백됩니다.

use crate::{
    db,
    error::AppError,
    extract::{AppJson, AppPath},
    models::*,
    AppState,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /todos/` → `[ {...}, ... ]` (없으면 빈 배열)
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let mut session = state.db.begin().await?;
    let todos = db::list_todos(&mut *session).await?;
    session.commit().await?;
    Ok(Json(todos))
}

/// `POST /todos/` + `{ "task_name": "...", ... }`
///
/// `task_name`이 없거나 타입이 맞지 않으면 `AppJson`이 422로 거절합니다.
/// 없는 사용자를 가리키는 `user_id`는 DB가 거절하여 409가 됩니다.
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(req): AppJson<TodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let mut session = state.db.begin().await?;
    let todo = db::insert_todo(&mut *session, &req).await?;
    session.commit().await?;

    tracing::debug!(task_id = todo.task_id, "Created todo");
    Ok(Json(todo))
}

/// `PUT /todos/{task_id}` + 할 일 전체 필드
///
/// 본문에 없는 필드는 기본값으로 덮어씁니다 (`TodoRequest` 참고).
/// 해당 ID가 없으면 404이며 새 행은 만들지 않습니다.
pub async fn update_todo(
    State(state): State<AppState>,
    AppPath(task_id): AppPath<i64>,
    AppJson(req): AppJson<TodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let mut session = state.db.begin().await?;
    let todo = db::update_todo(&mut *session, task_id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".to_string()))?;
    session.commit().await?;

    tracing::debug!(task_id, "Replaced todo");
    Ok(Json(todo))
}

/// `DELETE /todos/{task_id}` → `{ "message": "Todo with ID <id> deleted successfully" }`
pub async fn delete_todo(
    State(state): State<AppState>,
    AppPath(task_id): AppPath<i64>,
) -> Result<Json<Value>, AppError> {
    let mut session = state.db.begin().await?;
    let deleted = db::delete_todo(&mut *session, task_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Todo not found".to_string()));
    }
    session.commit().await?;

    tracing::debug!(task_id, "Deleted todo");
    Ok(Json(json!({
        "message": format!("Todo with ID {} deleted successfully", task_id)
    })))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{file_app, send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn create_returns_server_assigned_id() {
        let app = test_app().await;

        let body = json!({
            "task_name": "Assignments",
            "Description": "First Assignment",
            "Priority": 1,
            "Completed_task": false,
            "due_date": "2024-01-01T00:00:00"
        });
        let (status, data) = send(&app, Method::POST, "/todos/", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(data["task_id"].is_i64());
        assert_eq!(data["task_name"], "Assignments");
        assert_eq!(data["Description"], "First Assignment");
        assert_eq!(data["Priority"], 1);
        assert_eq!(data["Completed_task"], false);
        assert_eq!(data["due_date"], "2024-01-01T00:00:00");
        assert_eq!(data["user_id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn create_without_task_name_is_unprocessable() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "Description": "no name" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(data["detail"].as_str().unwrap().contains("task_name"));

        let (_, list) = send(&app, Method::GET, "/todos/", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn create_with_wrong_type_is_unprocessable() {
        let app = test_app().await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "task_name": "x", "Priority": "high" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_with_unknown_user_conflicts() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "task_name": "Orphan", "user_id": 12345 })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(data["detail"].is_string());

        let (_, list) = send(&app, Method::GET, "/todos/", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn create_with_existing_user_links_it() {
        let app = test_app().await;

        let (_, user) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({ "pswd": "12345678" })),
        )
        .await;
        let user_id = user["user_id"].clone();

        let (status, todo) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "task_name": "Owned", "user_id": user_id.clone() })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(todo["user_id"], user_id);
    }

    #[tokio::test]
    async fn list_grows_with_each_create() {
        let app = test_app().await;

        for n in 0..3 {
            let (status, _) = send(
                &app,
                Method::POST,
                "/todos/",
                Some(json!({ "task_name": format!("task {n}") })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, list) = send(&app, Method::GET, "/todos/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_replaces_existing_todo() {
        let app = test_app().await;

        let (_, created) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({
                "task_name": "Test Task",
                "Description": "Test Description",
                "Priority": 1,
                "Completed_task": true
            })),
        )
        .await;
        let uri = format!("/todos/{}", created["task_id"]);

        let (status, updated) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({
                "task_name": "Updated",
                "Description": "Updated Desc",
                "Priority": 2
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["task_id"], created["task_id"]);
        assert_eq!(updated["task_name"], "Updated");
        assert_eq!(updated["Description"], "Updated Desc");
        assert_eq!(updated["Priority"], 2);
        // 전체 교체: 생략된 Completed_task는 기본값 false로 덮어씀
        assert_eq!(updated["Completed_task"], false);
    }

    #[tokio::test]
    async fn update_missing_todo_is_not_found() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::PUT,
            "/todos/1",
            Some(json!({ "task_name": "Updated" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(data["detail"], "Todo not found");

        let (_, list) = send(&app, Method::GET, "/todos/", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn non_integer_task_id_is_unprocessable() {
        let app = test_app().await;

        let (status, data) = send(&app, Method::DELETE, "/todos/abc", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(data["detail"].is_string());
    }

    #[tokio::test]
    async fn delete_removes_todo_then_reports_not_found() {
        let app = test_app().await;

        let (_, created) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "task_name": "Test Task" })),
        )
        .await;
        let task_id = created["task_id"].as_i64().unwrap();
        let uri = format!("/todos/{task_id}");

        let (status, data) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            data,
            json!({ "message": format!("Todo with ID {task_id} deleted successfully") })
        );

        let (_, list) = send(&app, Method::GET, "/todos/", None).await;
        assert!(list
            .as_array()
            .unwrap()
            .iter()
            .all(|todo| todo["task_id"] != task_id));

        let (status, data) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(data["detail"], "Todo not found");
    }

    #[tokio::test]
    async fn stringly_typed_fields_are_coerced() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({
                "task_id": "01",
                "task_name": "A",
                "Priority": "1",
                "Completed_task": "1",
                "due_date": "2024-01-01T09:00:00+09:00"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["task_id"], 1);
        assert_eq!(data["Priority"], 1);
        assert_eq!(data["Completed_task"], true);
        assert_eq!(data["due_date"], "2024-01-01T00:00:00");
    }

    #[tokio::test]
    async fn utc_due_date_is_stored_without_offset() {
        let app = test_app().await;

        let (status, data) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "task_name": "A", "due_date": "2024-01-01T00:00:00Z" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["due_date"], "2024-01-01T00:00:00");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_all_succeed() {
        let (app, _dir) = file_app(8).await;

        let (_, created) = send(
            &app,
            Method::POST,
            "/todos/",
            Some(json!({ "task_name": "Shared" })),
        )
        .await;
        let uri = format!("/todos/{}", created["task_id"]);

        let handles: Vec<_> = (0..50)
            .map(|n| {
                let app = app.clone();
                let uri = uri.clone();
                tokio::spawn(async move {
                    send(
                        &app,
                        Method::PUT,
                        &uri,
                        Some(json!({ "task_name": format!("rev {n}"), "Priority": n })),
                    )
                    .await
                })
            })
            .collect();

        for handle in handles {
            let (status, data) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK, "{data}");
        }

        let (_, list) = send(&app, Method::GET, "/todos/", None).await;
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0]["task_name"].as_str().unwrap().starts_with("rev "));
    }
}
