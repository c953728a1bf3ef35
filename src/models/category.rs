//! # 카테고리(Category) 모델 정의
//!
//! 카테고리는 아직 할 일과 연결되지 않은 독립 레코드입니다.

use super::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub category_id: i64,
    pub category_name: Option<String>,
}

/// `POST /category/` 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRequest {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
}
