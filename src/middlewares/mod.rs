//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 JWT 토큰을 요청당 한 번 검증하고
//! 호출자 신원을 request extensions에 저장합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/bookmarks")
//!         .wrap(AuthMiddleware::required(token_service.clone()))
//!         .service(handlers::bookmarks::list_bookmarks)
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
