//! # 할 일(Todo) 데이터베이스 쿼리 모듈
//!
//! `todos` 테이블에 대한 CRUD 쿼리 함수들입니다.
//! 모든 함수는 요청 세션의 연결(`&mut SqliteConnection`)을 받아 비동기로 실행됩니다.
//!
//! ## 테이블 구조
//! - `todos`: task_id, user_id(→ users, UNIQUE), task_name, description,
//!   priority, completed_task, due_date

use crate::error::AppError;
use crate::models::*;
use sqlx::SqliteConnection;

/// 모든 할 일을 저장 순서대로 조회합니다.
pub async fn list_todos(conn: &mut SqliteConnection) -> Result<Vec<Todo>, AppError> {
    let todos = sqlx::query_as::<_, Todo>(
        r#"
        SELECT task_id, user_id, task_name, description, priority, completed_task, due_date
        FROM todos
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(todos)
}

/// ID로 할 일 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Todo)을 반환합니다.
pub async fn get_todo(
    conn: &mut SqliteConnection,
    task_id: i64,
) -> Result<Option<Todo>, AppError> {
    let todo = sqlx::query_as::<_, Todo>(
        r#"
        SELECT task_id, user_id, task_name, description, priority, completed_task, due_date
        FROM todos
        WHERE task_id = ?
        "#,
    )
    .bind(task_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(todo)
}

/// 새 할 일을 저장하고 저장된 행을 반환합니다.
///
/// ## 처리 흐름
/// 1. INSERT 쿼리로 DB에 저장. `task_id`가 None이면 SQL NULL이 바인딩되고,
///    SQLite가 INTEGER PRIMARY KEY에 다음 번호를 할당합니다.
/// 2. `last_insert_rowid()`로 할당된 ID를 얻어 다시 조회하여 반환
///
/// 존재하지 않는 `user_id`, 이미 다른 할 일이 가리키는 `user_id`,
/// 중복된 `task_id`는 DB 제약 조건 위반(`AppError::Database`)이 됩니다.
pub async fn insert_todo(
    conn: &mut SqliteConnection,
    req: &TodoRequest,
) -> Result<Todo, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO todos (task_id, user_id, task_name, description, priority, completed_task, due_date)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(req.task_id)
    .bind(req.user_id)
    .bind(&req.task_name)
    .bind(&req.description)
    .bind(req.priority)
    .bind(req.completed_task)
    .bind(req.due_date)
    .execute(&mut *conn)
    .await?;

    get_todo(conn, result.last_insert_rowid())
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created todo".to_string()))
}

/// 할 일을 전체 교체(full replace) 방식으로 수정합니다.
///
/// PATCH와 달리 요청에서 빠진 필드도 기본값(NULL/false)으로 덮어씁니다.
/// `req.task_id`는 무시하고 경로의 `task_id`를 기준으로 합니다.
///
/// ## 반환값
/// - `Ok(Some(Todo))`: 수정 성공, 변경된 할 일 반환
/// - `Ok(None)`: 해당 ID의 할 일이 존재하지 않음 (행을 만들지 않음)
/// - `Err(...)`: DB 에러 발생 (제약 조건 위반 포함)
///
/// 세션의 첫 문장이 쓰기(UPDATE)여야 합니다. 조회를 먼저 하면 SQLite가
/// 읽기 잠금을 쓰기 잠금으로 올리지 못해 동시 요청이 바로 `database is locked`로
/// 실패합니다. 쓰기로 시작하면 busy timeout 동안 차례를 기다립니다.
pub async fn update_todo(
    conn: &mut SqliteConnection,
    task_id: i64,
    req: &TodoRequest,
) -> Result<Option<Todo>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE todos
        SET user_id = ?, task_name = ?, description = ?, priority = ?,
            completed_task = ?, due_date = ?
        WHERE task_id = ?
        "#,
    )
    .bind(req.user_id)
    .bind(&req.task_name)
    .bind(&req.description)
    .bind(req.priority)
    .bind(req.completed_task)
    .bind(req.due_date)
    .bind(task_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None); // 404 처리를 라우트 핸들러에 위임
    }

    get_todo(conn, task_id).await
}

/// ID로 할 일을 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 할 일이 존재하지 않아 삭제된 행이 없음
pub async fn delete_todo(conn: &mut SqliteConnection, task_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM todos WHERE task_id = ?")
        .bind(task_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
