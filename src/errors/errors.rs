//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 북마크 서비스 전체에서 공유하는 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 원칙
//!
//! - 리포지토리 계층은 스토리지 엔진의 에러 코드를 이 타입으로 번역한 뒤에만
//!   상위 계층으로 전달합니다. 서비스 계층은 드라이버 에러를 직접 다루지 않습니다.
//! - 인증 실패(401)는 하위 원인(만료/서명/형식)과 무관하게 클라이언트에게
//!   동일한 일반 메시지로 응답합니다. 상세 원인은 로그에만 남깁니다.
//! - 로그인 실패는 "존재하지 않는 이메일"과 "잘못된 비밀번호"를 구분하지 않습니다
//!   (계정 열거 공격 방지).

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 토큰 부재 (401 Unauthorized)
    #[error("Authentication required")]
    Unauthenticated,

    /// 만료된 인증 토큰 (401 Unauthorized)
    #[error("Token expired")]
    TokenExpired,

    /// 서명이 일치하지 않는 토큰 (401 Unauthorized)
    #[error("Invalid token signature")]
    InvalidSignature,

    /// 파싱할 수 없는 토큰 (401 Unauthorized)
    #[error("Malformed token")]
    MalformedToken,

    /// 로그인 자격 증명 불일치 (403 Forbidden)
    ///
    /// 이메일이 존재하지 않는 경우와 비밀번호가 틀린 경우 모두 이 에러를 사용합니다.
    #[error("Credentials incorrect")]
    CredentialError,

    /// 이미 등록된 이메일로 가입 시도 (403 Forbidden)
    #[error("Credentials taken")]
    DuplicateEmail,

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 다른 계정 소유의 리소스 접근도 존재하지 않는 것과 동일하게 처리합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated
            | AppError::TokenExpired
            | AppError::InvalidSignature
            | AppError::MalformedToken => StatusCode::UNAUTHORIZED,
            AppError::CredentialError | AppError::DuplicateEmail => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 401 계열은 하위 원인과 무관하게 동일한 메시지로, 500 계열은 내부 상세를
    /// 숨긴 일반 메시지로 응답합니다. 상세 내용은 로그로만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = self.status_code();
        let message = match status {
            StatusCode::UNAUTHORIZED => {
                log::warn!("인증 실패 응답: {}", self);
                "Authentication required".to_string()
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                log::error!("내부 오류 응답: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
