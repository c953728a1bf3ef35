//! # 사용자 데이터베이스 쿼리 모듈
//!
//! `users` 테이블의 생성/목록/단건 조회 쿼리입니다.
//! `pswd`는 받은 그대로 저장합니다.

use crate::error::AppError;
use crate::models::{User, UserRequest};
use sqlx::SqliteConnection;

pub async fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT user_id, pswd FROM users")
        .fetch_all(&mut *conn)
        .await?;

    Ok(users)
}

pub async fn get_user(conn: &mut SqliteConnection, user_id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT user_id, pswd FROM users WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(user)
}

pub async fn insert_user(conn: &mut SqliteConnection, req: &UserRequest) -> Result<User, AppError> {
    let result = sqlx::query("INSERT INTO users (user_id, pswd) VALUES (?, ?)")
        .bind(req.user_id)
        .bind(&req.pswd)
        .execute(&mut *conn)
        .await?;

    get_user(conn, result.last_insert_rowid())
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created user".to_string()))
}
