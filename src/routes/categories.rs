//! 카테고리(Category) 라우트 핸들러: `GET /category/`, `POST /category/`

use crate::{db, error::AppError, extract::AppJson, models::*, AppState};
use axum::{extract::State, Json};

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let mut session = state.db.begin().await?;
    let categories = db::list_categories(&mut *session).await?;
    session.commit().await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<CategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let mut session = state.db.begin().await?;
    let category = db::insert_category(&mut *session, &req).await?;
    session.commit().await?;
    Ok(Json(category))
}
