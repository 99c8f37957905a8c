//! HTTP 요청 핸들러 모듈
//!
//! 각 엔드포인트의 요청 본문 검증, 서비스 호출, 응답 직렬화를 담당합니다.
//! 비즈니스 로직은 모두 서비스 계층에 위임합니다.

pub mod auth;
pub mod bookmarks;
pub mod users;
