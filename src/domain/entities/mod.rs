//! 도메인 엔티티 모듈
//!
//! MongoDB에 저장되는 핵심 도메인 엔티티들을 정의합니다.
//! 엔티티는 저장소 표현이며, HTTP 응답으로는 DTO 변환을 거쳐서만 노출됩니다.

pub mod bookmarks;
pub mod users;
