//! # 할 일(Todo) 모델 정의
//!
//! - `Todo`: `todos` 테이블 한 행(row)에 대응하는 응답용 구조체
//! - `TodoRequest`: 생성(`POST /todos/`)과 수정(`PUT /todos/{task_id}`)에
//!   공통으로 쓰는 요청 본문
//!
//! JSON 필드 이름은 기존 클라이언트와의 호환을 위해 `Description`,
//! `Priority`, `Completed_task`처럼 대문자로 시작합니다.
//! `#[serde(rename = "...")]`로 Rust 필드 이름과 JSON 키를 분리합니다.

use chrono::NaiveDateTime;
use super::lenient;
use serde::{Deserialize, Serialize};

/// 할 일 엔티티 — DB의 `todos` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// 할 일 고유 식별자 (SQLite INTEGER PRIMARY KEY → i64)
    pub task_id: i64,
    /// 이 할 일을 가진 사용자 (`users.user_id` 외래 키, UNIQUE)
    pub user_id: Option<i64>,
    pub task_name: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Priority")]
    pub priority: Option<i64>,
    #[serde(rename = "Completed_task")]
    pub completed_task: bool,
    /// 마감일. 오프셋 없는 ISO-8601 (예: `2024-01-01T00:00:00`)
    pub due_date: Option<NaiveDateTime>,
}

/// 할 일 생성/수정 요청 본문.
///
/// `task_name`만 필수입니다. 빠지면 JSON 추출 단계에서 422로 거절되어
/// DB까지 내려가지 않습니다. 숫자/불리언 필드는 `"1"` 같은 문자열도
/// 받아들입니다 (`lenient` 모듈 참고).
///
/// 수정(PUT)에서도 같은 구조체를 쓰며, **전체 교체(full replace)**로 동작합니다.
/// 본문에서 빠진 필드는 `None`/`false`로 채워진 채 기존 값을 덮어씁니다.
/// 예: `{ "task_name": "새 이름" }`으로 수정하면 `Priority`는 NULL이 됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoRequest {
    /// 생략하면 DB가 다음 번호를 할당합니다. 수정 요청에서는 무시됩니다.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub task_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub user_id: Option<i64>,
    pub task_name: String,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,
    #[serde(
        rename = "Priority",
        alias = "priority",
        default,
        deserialize_with = "lenient::opt_i64"
    )]
    pub priority: Option<i64>,
    #[serde(
        rename = "Completed_task",
        alias = "completed_task",
        alias = "completed",
        default,
        deserialize_with = "lenient::flag"
    )]
    pub completed_task: bool,
    /// 오프셋이 붙은 값(`...Z`, `...+09:00`)은 UTC로 바꿔 저장합니다.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub due_date: Option<NaiveDateTime>,
}
