//! # 인증 HTTP 핸들러
//!
//! 회원가입과 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 두 엔드포인트 모두 인증 없이 접근 가능하며, 성공 시 JWT 액세스 토큰을 반환합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::AuthRequest;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 회원가입 핸들러
///
/// 새로운 계정을 생성하고 즉시 로그인된 상태의 액세스 토큰을 발급합니다.
///
/// # 엔드포인트
///
/// `POST /auth/signup`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## 실패 사례
///
/// - 검증 실패 (400 Bad Request): 이메일 형식 오류 또는 빈 비밀번호
/// - 이메일 중복 (403 Forbidden): `{"error": "Credentials taken"}`
#[post("/signup")]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    payload: web::Json<AuthRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 이메일/비밀번호를 검증하고 액세스 토큰을 발급합니다.
///
/// # 엔드포인트
///
/// `POST /auth/signin`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## 실패 사례
///
/// 존재하지 않는 이메일과 잘못된 비밀번호는 동일한 응답을 반환합니다 (403 Forbidden):
/// ```json
/// {
///   "error": "Credentials incorrect"
/// }
/// ```
#[post("/signin")]
pub async fn signin(
    auth_service: web::Data<AuthService>,
    payload: web::Json<AuthRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.signin(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
