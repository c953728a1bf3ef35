//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 생성과 목록 조회 쿼리 함수들입니다.
//! 모든 함수는 요청 세션의 연결을 받아 비동기로 실행됩니다.

use crate::error::AppError;
use crate::models::{Tag, TagRequest};
use sqlx::SqliteConnection;

/// 모든 태그를 조회합니다.
///
/// `sqlx::query_as::<_, Tag>(sql)`는 SQL 결과를 Tag 구조체로 자동 변환하고,
/// `fetch_all`은 모든 행을 Vec으로 반환합니다.
pub async fn list_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>("SELECT tag_id, tag_name FROM tags")
        .fetch_all(&mut *conn)
        .await?;

    Ok(tags)
}

/// ID로 태그 하나를 조회합니다.
pub async fn get_tag(conn: &mut SqliteConnection, tag_id: i64) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("SELECT tag_id, tag_name FROM tags WHERE tag_id = ?")
        .bind(tag_id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(tag)
}

/// 새 태그를 생성하고 생성된 태그를 반환합니다.
///
/// `.bind()`는 SQL의 `?` 플레이스홀더에 값을 바인딩합니다.
/// `Option`이 None이면 SQL NULL로 처리되어, `tag_id`는 SQLite가 할당합니다.
pub async fn insert_tag(conn: &mut SqliteConnection, req: &TagRequest) -> Result<Tag, AppError> {
    let result = sqlx::query("INSERT INTO tags (tag_id, tag_name) VALUES (?, ?)")
        .bind(req.tag_id)
        .bind(&req.tag_name)
        .execute(&mut *conn)
        .await?;

    // 생성 직후 조회하여 완전한 Tag 객체를 반환합니다
    get_tag(conn, result.last_insert_rowid())
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created tag".to_string()))
}
