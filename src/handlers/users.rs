//! # 사용자 프로필 HTTP 핸들러
//!
//! 인증된 사용자 본인의 프로필 조회/수정 엔드포인트입니다.
//! 모든 핸들러는 `AuthMiddleware::required` 하위 스코프에 등록되어야 하며,
//! 신원은 `AuthenticatedUser` 추출기를 통해 전달받습니다.

use actix_web::{get, patch, web, HttpResponse};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::EditUserRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 현재 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/me`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "id": 1,
///   "email": "user@example.com",
///   "firstName": "Jane",
///   "createdAt": "2024-01-01T00:00:00Z",
///   "updatedAt": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// 비밀번호 해시는 응답에 포함되지 않습니다.
#[get("/me")]
pub async fn get_me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_self(user.account_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 사용자 수정 핸들러
///
/// 요청 본문에 포함된 필드만 수정하는 부분 업데이트입니다.
///
/// # 엔드포인트
///
/// `PATCH /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "new@example.com",
///   "firstName": "Jane",
///   "lastName": "Doe"
/// }
/// ```
///
/// 모든 필드는 선택적이며, 생략된 필드는 변경되지 않습니다.
/// 수정된 프로필을 200 OK로 반환합니다.
#[patch("")]
pub async fn edit_me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
    payload: web::Json<EditUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service
        .edit_self(user.account_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
