//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 북마크 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Route Groups
//!
//! ## Public 라우트 (인증 불필요)
//! - `POST /auth/signup` - 회원가입
//! - `POST /auth/signin` - 로그인
//! - `GET /health` - 헬스체크
//!
//! ## Protected 라우트 (Bearer 토큰 필요)
//! - `GET /users/me`, `PATCH /users` - 프로필 조회/수정
//! - `GET|POST /bookmarks`, `GET|PATCH|DELETE /bookmarks/{id}` - 북마크 CRUD

use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenService;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
/// 보호된 스코프는 전달받은 토큰 서비스로 `AuthMiddleware`를 구성합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `token_service` - JWT 검증에 사용할 토큰 서비스
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg, token_service.clone());
    configure_bookmark_routes(cfg, token_service);
}

/// 인증 관련 라우트를 설정합니다
///
/// 회원가입과 로그인 엔드포인트를 등록합니다.
/// 인증을 위한 엔드포인트이므로 모두 Public 접근이 가능합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::signin),
    );
}

/// 사용자 프로필 라우트를 설정합니다
///
/// 모두 인증이 필요한 엔드포인트입니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    cfg.service(
        web::scope("/users")
            .wrap(AuthMiddleware::required(token_service))
            .service(handlers::users::get_me)
            .service(handlers::users::edit_me),
    );
}

/// 북마크 라우트를 설정합니다
///
/// 모두 인증이 필요하며, 핸들러는 인증된 사용자 소유의 북마크만 다룹니다.
fn configure_bookmark_routes(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>) {
    cfg.service(
        web::scope("/bookmarks")
            .wrap(AuthMiddleware::required(token_service))
            .service(handlers::bookmarks::list_bookmarks)
            .service(handlers::bookmarks::get_bookmark)
            .service(handlers::bookmarks::create_bookmark)
            .service(handlers::bookmarks::edit_bookmark)
            .service(handlers::bookmarks::delete_bookmark),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "bookmark_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn health_check_returns_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "bookmark_service_backend");
    }
}
