//! # 데이터 모델 모듈
//!
//! 네 가지 레코드 타입의 행(row) 구조체와 요청 본문 구조체를 정의합니다.
//! - `todo`: 할 일(Todo)
//! - `user`: 사용자(User)
//! - `category`: 카테고리(Category)
//! - `tag`: 태그(Tag)
//! - `lenient`: 문자열 숫자 등을 받아들이는 역직렬화 함수
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Todo`처럼 짧게 접근합니다.

pub mod category;
pub mod lenient;
pub mod tag;
pub mod todo;
pub mod user;

pub use category::*;
pub use tag::*;
pub use todo::*;
pub use user::*;
