//! # todo-records
//!
//! 할 일(Todo), 사용자(User), 카테고리(Category), 태그(Tag) 레코드를
//! JSON HTTP API로 저장/조회하는 서비스의 라이브러리 부분입니다.
//!
//! - `db`: 영속성 게이트웨이 (`Database`, 요청별 세션, 쿼리 함수)
//! - `models`: 테이블 행 구조체와 요청 본문 구조체
//! - `routes`: HTTP 핸들러
//! - `extract`: 실패를 JSON 에러로 바꾸는 요청 추출자
//!
//! 실행 파일(main.rs)은 설정을 읽고 `Database`를 만든 뒤
//! `create_router`로 만든 라우터를 서빙하기만 합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

use axum::{
    routing::{get, put},
    Router,
};
use db::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 전역 변수 대신 여기에 게이트웨이를 담아 주입하므로,
/// 테스트는 메모리 DB로 만든 `Database`를 넣기만 하면 됩니다.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// 모든 경로를 핸들러에 연결한 라우터를 만듭니다.
///
/// 경로 끝의 `/`까지 기존 클라이언트가 쓰던 그대로입니다 (`/todos/`, `/tag/` 등).
pub fn create_router(state: AppState) -> Router {
    // 브라우저 기반 클라이언트를 위해 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::read_root))
        .route("/todos/", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{task_id}",
            put(routes::update_todo).delete(routes::delete_todo),
        )
        .route("/users/", get(routes::list_users).post(routes::create_user))
        .route(
            "/category/",
            get(routes::list_categories).post(routes::create_category),
        )
        .route("/tag/", get(routes::list_tags).post(routes::create_tag))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
