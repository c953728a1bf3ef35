//! # 요청 추출자(Extractor)
//!
//! Axum 기본 `Json`/`Path` 추출자는 실패하면 일반 텍스트 본문으로 응답합니다.
//! 여기의 래퍼는 실패(rejection)를 `AppError`로 바꿔
//! 다른 에러와 같은 `{ "detail": "..." }` JSON 형태로 응답하게 합니다.
//!
//! - 본문이 비었거나 JSON 문법 오류, 필드 누락, 타입 불일치 → 422
//! - 정수가 아닌 경로 파라미터 (예: `/todos/abc`) → 422
//!
//! `AppJson`은 `Content-Type` 헤더를 확인하지 않습니다.
//! 헤더 없이 JSON을 보내던 기존 클라이언트도 그대로 동작합니다.

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        FromRequest, FromRequestParts, Request,
    },
};
use serde::de::DeserializeOwned;

/// JSON 요청 본문 추출자
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // 1. 본문 전체를 바이트로 읽습니다 (헤더 검사 없음)
        let bytes = Bytes::from_request(req, state).await?;

        // 2. JSON 파싱 + 구조체 변환. 문법 오류든 모양 불일치든 모두 422
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Unprocessable(format!("Failed to parse the request body: {}", e))
        })?;

        Ok(AppJson(value))
    }
}

/// URL 경로 파라미터 추출자
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => {
                AppError::Unprocessable(e.body_text())
            }
            other => AppError::Internal(other.body_text()),
        }
    }
}
