//! 인증 서비스 모듈
//!
//! 자격 증명 해싱, 토큰 발급/검증, 회원가입/로그인 오케스트레이션을 담당합니다.

pub mod auth_service;
pub mod password_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use password_service::PasswordService;
pub use token_service::TokenService;
