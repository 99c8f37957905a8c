//! 북마크 서비스 백엔드
//!
//! Rust 기반의 개인 북마크 관리 REST API 서비스입니다.
//! JWT 토큰 기반 인증, Argon2 비밀번호 해싱,
//! 그리고 사용자별로 격리된 북마크 CRUD를 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 이메일/비밀번호 회원가입, 로그인, 프로필 수정
//! - **JWT 인증**: 액세스 토큰 기반 상태 없는 인증
//! - **북마크 CRUD**: 사용자 소유 범위로 격리된 생성/조회/수정/삭제
//! - **MongoDB**: 사용자 및 북마크 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookmark_service_backend::db::Database;
//! use bookmark_service_backend::repositories::users::UserRepository;
//! use bookmark_service_backend::services::auth::{AuthService, PasswordService, TokenService};
//!
//! // 의존성을 명시적으로 조립
//! let database = Arc::new(Database::new().await?);
//! let users = Arc::new(UserRepository::new(database.clone()));
//! let auth_service = AuthService::new(
//!     users,
//!     Arc::new(PasswordService::new()),
//!     Arc::new(TokenService::from_env()),
//! );
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
