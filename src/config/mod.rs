//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩 관련 설정
//! - [`auth_config`] - JWT 토큰 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공합니다.
//! - 기본값은 개발 환경에서만 안전하며, 운영 환경에서는 명시적인 설정을 요구합니다.
//! - 설정값 파싱 실패는 기본값으로 대체하고 경고 로그를 남깁니다.

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
