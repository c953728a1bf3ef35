//! # 태그 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /tag/ | `list_tags` | 전체 태그 목록 |
//! | POST | /tag/ | `create_tag` | 새 태그 생성 |
//!
//! ## Axum 핸들러 패턴
//! - `State(state)`: 애플리케이션 공유 상태 (DB 게이트웨이)
//! - `AppJson(req)`: 요청 본문을 구조체로 파싱 (실패 시 JSON 에러 응답)

use crate::{db, error::AppError, extract::AppJson, models::*, AppState};
use axum::{extract::State, Json};

/// 전체 태그 목록을 조회합니다.
///
/// `GET /tag/` → `[ { "tag_id": 1, "tag_name": "..." }, ... ]`
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    let mut session = state.db.begin().await?;
    let tags = db::list_tags(&mut *session).await?;
    session.commit().await?;
    Ok(Json(tags))
}

/// 새 태그를 생성합니다.
///
/// `POST /tag/` + `{ "tag_id": 1, "tag_name": "..." }` (둘 다 선택)
pub async fn create_tag(
    State(state): State<AppState>,
    AppJson(req): AppJson<TagRequest>,
) -> Result<Json<Tag>, AppError> {
    let mut session = state.db.begin().await?;
    let tag = db::insert_tag(&mut *session, &req).await?;
    session.commit().await?;
    Ok(Json(tag))
}
