//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 루트 경로 (헬스체크)
//! - `todos`: 할 일 생성/목록/수정/삭제
//! - `users`: 사용자 생성/목록
//! - `categories`: 카테고리 생성/목록
//! - `tags`: 태그 생성/목록

pub mod categories;
pub mod health;
pub mod tags;
pub mod todos;
pub mod users;

// lib.rs의 라우터에서 `routes::list_todos`처럼 바로 접근 가능하게 합니다.
pub use categories::*;
pub use health::*;
pub use tags::*;
pub use todos::*;
pub use users::*;
