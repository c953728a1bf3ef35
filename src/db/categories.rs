//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! 카테고리는 생성과 목록 조회만 지원합니다 (수정/삭제 없음).

use crate::error::AppError;
use crate::models::{Category, CategoryRequest};
use sqlx::SqliteConnection;

/// 모든 카테고리를 조회합니다.
pub async fn list_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>, AppError> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT category_id, category_name FROM categories")
            .fetch_all(&mut *conn)
            .await?;

    Ok(categories)
}

pub async fn get_category(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT category_id, category_name FROM categories WHERE category_id = ?",
    )
    .bind(category_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(category)
}

/// 새 카테고리를 저장하고, 할당된 ID가 채워진 행을 다시 읽어 반환합니다.
pub async fn insert_category(
    conn: &mut SqliteConnection,
    req: &CategoryRequest,
) -> Result<Category, AppError> {
    let result = sqlx::query("INSERT INTO categories (category_id, category_name) VALUES (?, ?)")
        .bind(req.category_id)
        .bind(&req.category_name)
        .execute(&mut *conn)
        .await?;

    get_category(conn, result.last_insert_rowid())
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created category".to_string()))
}
