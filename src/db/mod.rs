//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 요청마다 `Database::begin()`으로 세션을 열고,
//! 이 모듈의 쿼리 함수 하나를 호출한 뒤 세션을 커밋합니다.
//!
//! 각 하위 모듈:
//! - `todos`: 할 일 생성/목록/조회/수정/삭제 쿼리
//! - `users`: 사용자 생성/목록 쿼리
//! - `categories`: 카테고리 생성/목록 쿼리
//! - `tags`: 태그 생성/목록 쿼리

pub mod categories;
pub mod tags;
pub mod todos;
pub mod users;

pub use categories::*;
pub use tags::*;
pub use todos::*;
pub use users::*;

use crate::config::Config;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use std::time::Duration;

/// 요청 하나의 수명에 묶인 DB 세션.
///
/// `commit()`하지 않고 드롭(drop)되면 자동으로 롤백되고,
/// 연결은 어느 경우든 풀로 돌아갑니다.
pub type Session = Transaction<'static, Sqlite>;

/// 영속성 게이트웨이: 연결 풀을 소유하고 세션을 발급합니다.
///
/// `main`에서 한 번 만들어 `AppState`에 담아 핸들러에 주입합니다.
/// 테스트는 `Database::in_memory()`로 만든 인스턴스를 대신 주입합니다.
/// `SqlitePool`은 내부적으로 Arc이므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 설정의 `DATABASE_URL`로 연결 풀을 만듭니다.
    ///
    /// 파일이 없으면 새로 만들고, 외래 키 제약을 켭니다.
    /// 첫 연결까지 맺어 보므로 DB에 닿을 수 없으면 여기서 에러가 납니다.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 스키마가 준비된 메모리 DB (테스트용)
    ///
    /// SQLite 메모리 DB는 연결마다 따로 생기므로 연결을 하나로 고정하고
    /// 풀이 그 연결을 닫지 않게 합니다.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// 모든 테이블을 (없으면) 생성합니다.
    ///
    /// `sqlx::migrate!`는 컴파일 타임에 ./migrations 폴더의 SQL을 포함시키고,
    /// 아직 적용되지 않은 것만 실행하므로 여러 번 불러도 안전합니다.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }

    /// 요청 하나를 위한 세션(트랜잭션)을 엽니다.
    pub async fn begin(&self) -> Result<Session, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// 풀의 모든 연결을 닫습니다. 서버 종료 시 한 번 호출합니다.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
