//! # 사용자(User) 모델 정의
//!
//! - `User`: `users` 테이블 한 행 (응답용)
//! - `UserRequest`: `POST /users/` 요청 본문

use super::lenient;
use serde::{Deserialize, Serialize};

/// `users` 테이블 한 행.
///
/// `pswd`는 받은 그대로(평문) 저장되고 응답에도 그대로 포함됩니다.
/// 해싱 방식이 정해질 때까지 기존 동작을 유지합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub pswd: Option<String>,
}

/// `POST /users/` 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRequest {
    /// `"00001"`처럼 문자열로 와도 정수로 변환합니다.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(alias = "password", default)]
    pub pswd: Option<String>,
}
