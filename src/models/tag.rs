//! # 태그 모델 정의
//!
//! - `Tag`: DB에 저장된 태그 (응답용)
//! - `TagRequest`: 새 태그 생성 시 클라이언트가 보내는 JSON 본문
//!
//! 태그는 아직 할 일과 연결되지 않은 독립 레코드입니다.

use super::lenient;
use serde::{Deserialize, Serialize};

/// 태그 엔티티 — DB의 `tags` 테이블 한 행(row)에 대응합니다.
///
/// - `Serialize`: API 응답 시 JSON으로 변환
/// - `sqlx::FromRow`: SQL 쿼리 결과(행)를 이 구조체로 자동 매핑
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    /// 태그 고유 식별자
    pub tag_id: i64,
    /// 태그 이름, 없을 수도 있으므로 Option 타입
    pub tag_name: Option<String>,
}

/// 태그 생성 요청 — `POST /tag/`의 요청 본문(body)에 해당합니다.
///
/// 모든 필드가 선택입니다. `tag_id`를 생략하면 DB가 번호를 붙입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRequest {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub tag_id: Option<i64>,
    #[serde(default)]
    pub tag_name: Option<String>,
}
