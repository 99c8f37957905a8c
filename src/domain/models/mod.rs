//! 내부 도메인 모델 모듈
//!
//! 저장소 엔티티도 와이어 DTO도 아닌, 요청 처리 파이프라인 내부에서
//! 사용되는 모델들을 정의합니다.

pub mod auth;
pub mod token;
