//! 도메인 모듈
//!
//! 엔티티, DTO, 내부 모델을 한 곳에서 관리합니다.
//!
//! - [`entities`] - MongoDB에 저장되는 엔티티 (User, Bookmark)
//! - [`dto`] - HTTP 요청/응답 경계의 데이터 전송 객체
//! - [`models`] - 요청 파이프라인 내부 모델 (인증 신원, 토큰 클레임)

pub mod dto;
pub mod entities;
pub mod models;

// 핸들러/서비스에서 자주 쓰는 타입들 재export
pub use dto::bookmarks::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};
pub use dto::tokens::TokenResponse;
pub use dto::users::{AuthRequest, EditUserRequest, UserResponse};
pub use models::{auth, token};
