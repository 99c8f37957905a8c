//! # 북마크 HTTP 핸들러
//!
//! 사용자별 북마크 CRUD 엔드포인트입니다. 모든 조회와 수정은
//! 인증된 사용자가 소유한 북마크로 한정되며, 다른 사용자의 북마크는
//! 존재하지 않는 것과 동일하게 404로 처리됩니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::{CreateBookmarkRequest, EditBookmarkRequest};
use crate::errors::AppError;
use crate::services::bookmarks::BookmarkService;

/// 북마크 목록 조회 핸들러
///
/// `GET /bookmarks` - 현재 사용자의 북마크 전체를 배열로 반환합니다.
/// 북마크가 없으면 빈 배열을 반환합니다 (404가 아님).
#[get("")]
pub async fn list_bookmarks(
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
) -> Result<HttpResponse, AppError> {
    let response = bookmark_service.list(user.account_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 북마크 단건 조회 핸들러
///
/// `GET /bookmarks/{id}`
#[get("/{bookmark_id}")]
pub async fn get_bookmark(
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
    bookmark_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = bookmark_service
        .get_by_id(user.account_id, bookmark_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 북마크 생성 핸들러
///
/// `POST /bookmarks`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Rust Book",
///   "description": "공식 튜토리얼",
///   "link": "https://doc.rust-lang.org/book/"
/// }
/// ```
///
/// 생성된 북마크를 201 Created로 반환합니다.
#[post("")]
pub async fn create_bookmark(
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
    payload: web::Json<CreateBookmarkRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = bookmark_service
        .create(user.account_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 북마크 수정 핸들러
///
/// `PATCH /bookmarks/{id}` - 본문에 포함된 필드만 수정하는 부분 업데이트입니다.
#[patch("/{bookmark_id}")]
pub async fn edit_bookmark(
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
    bookmark_id: web::Path<i64>,
    payload: web::Json<EditBookmarkRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = bookmark_service
        .edit_by_id(user.account_id, bookmark_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 북마크 삭제 핸들러
///
/// `DELETE /bookmarks/{id}` - 성공 시 204 No Content를 반환합니다.
#[delete("/{bookmark_id}")]
pub async fn delete_bookmark(
    user: AuthenticatedUser,
    bookmark_service: web::Data<BookmarkService>,
    bookmark_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    bookmark_service
        .delete_by_id(user.account_id, bookmark_id.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
