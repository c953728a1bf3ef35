//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{ "detail": "..." }` 형태의 HTTP 응답으로 변환

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 레코드를 찾을 수 없음 (HTTP 404)
    #[error("{0}")]
    NotFound(String),

    /// 요청 본문/경로의 모양이나 타입이 맞지 않음 (HTTP 422)
    /// 예: 필수 필드 `task_name` 누락, 변환할 수 없는 값, JSON 문법 오류, 빈 본문
    #[error("{0}")]
    Unprocessable(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류
    /// 응답 시점에 제약 조건 위반(409), 저장소 연결 불가(503), 그 외(500)로 나눕니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// sqlx 에러를 클라이언트에게 보여줄 분류로 나눕니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreFailure {
    /// UNIQUE / FOREIGN KEY / NOT NULL / CHECK 제약 조건 위반
    ConstraintViolation,
    /// 연결 풀 타임아웃, 닫힌 풀, 소켓/파일 I/O 실패
    Unavailable,
    Other,
}

fn classify(err: &sqlx::Error) -> StoreFailure {
    match err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => StoreFailure::ConstraintViolation,
            // 확장 결과 코드가 없는 드라이버는 메시지로만 구분됩니다.
            _ if db_err.message().contains("constraint failed") => {
                StoreFailure::ConstraintViolation
            }
            _ => StoreFailure::Other,
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreFailure::Unavailable
        }
        _ => StoreFailure::Other,
    }
}

impl AppError {
    /// 이 에러가 응답될 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(e) => match classify(e) {
                StoreFailure::ConstraintViolation => StatusCode::CONFLICT,
                StoreFailure::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                StoreFailure::Other => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Internal)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    /// 제약 조건 위반은 어떤 제약인지 알 수 있도록 DB 메시지를 그대로 돌려줍니다.
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                msg.clone()
            }
            AppError::Unprocessable(ref msg) => msg.clone(),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Database(ref e) => match classify(e) {
                StoreFailure::ConstraintViolation => {
                    tracing::warn!("Constraint violation: {}", e);
                    match e.as_database_error() {
                        Some(db_err) => format!("Constraint violation: {}", db_err.message()),
                        None => "Constraint violation".to_string(),
                    }
                }
                StoreFailure::Unavailable => {
                    tracing::error!("Store unavailable: {}", e);
                    "The database is unavailable".to_string()
                }
                StoreFailure::Other => {
                    tracing::error!("Database error: {}", e);
                    "A database error occurred".to_string()
                }
            },
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
