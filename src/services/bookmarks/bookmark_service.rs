//! # 북마크 서비스 구현
//!
//! 계정 스코프 북마크 CRUD 비즈니스 로직입니다.
//! 모든 연산은 호출자의 계정 ID를 명시적 인자로 받습니다.
//!
//! ## 소유권 정책
//!
//! 다른 계정 소유의 북마크에 대한 조회/수정/삭제는 모두 404로 응답합니다.
//! 403을 쓰면 해당 ID의 북마크가 존재한다는 사실이 노출되기 때문입니다.

use mongodb::bson::Document;
use std::sync::Arc;

use crate::domain::dto::bookmarks::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};
use crate::domain::entities::bookmarks::Bookmark;
use crate::errors::{AppError, AppResult};
use crate::repositories::bookmarks::BookmarkRepository;
use crate::utils::string_utils::clean_optional_string;

/// 북마크 비즈니스 로직 서비스
pub struct BookmarkService {
    bookmarks: Arc<BookmarkRepository>,
}

impl BookmarkService {
    pub fn new(bookmarks: Arc<BookmarkRepository>) -> Self {
        Self { bookmarks }
    }

    /// 호출자의 모든 북마크 조회
    pub async fn list(&self, account_id: i64) -> AppResult<Vec<BookmarkResponse>> {
        let bookmarks = self.bookmarks.find_all_by_user(account_id).await?;

        Ok(bookmarks.into_iter().map(BookmarkResponse::from).collect())
    }

    /// 호출자 소유의 북마크 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 북마크가 없거나 다른 계정 소유인 경우
    pub async fn get_by_id(&self, account_id: i64, bookmark_id: i64) -> AppResult<BookmarkResponse> {
        self.bookmarks
            .find_by_id_and_user(bookmark_id, account_id)
            .await?
            .map(BookmarkResponse::from)
            .ok_or_else(|| AppError::NotFound("bookmark not found".to_string()))
    }

    /// 새 북마크 생성 (소유자 = 호출자)
    pub async fn create(
        &self,
        account_id: i64,
        request: CreateBookmarkRequest,
    ) -> AppResult<BookmarkResponse> {
        let bookmark = Bookmark::new(
            account_id,
            request.title,
            clean_optional_string(request.description),
            request.link,
        );

        let created = self.bookmarks.create(bookmark).await?;

        log::info!("북마크 생성 완료: id={}, 계정={}", created.id, account_id);

        Ok(BookmarkResponse::from(created))
    }

    /// 호출자 소유의 북마크 부분 수정
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 북마크가 없거나 다른 계정 소유인 경우
    pub async fn edit_by_id(
        &self,
        account_id: i64,
        bookmark_id: i64,
        request: EditBookmarkRequest,
    ) -> AppResult<BookmarkResponse> {
        let mut update_doc = Document::new();

        if let Some(title) = clean_optional_string(request.title) {
            update_doc.insert("title", title);
        }
        if let Some(description) = clean_optional_string(request.description) {
            update_doc.insert("description", description);
        }
        if let Some(link) = clean_optional_string(request.link) {
            update_doc.insert("link", link);
        }

        self.bookmarks
            .update(bookmark_id, account_id, update_doc)
            .await?
            .map(BookmarkResponse::from)
            .ok_or_else(|| AppError::NotFound("bookmark not found".to_string()))
    }

    /// 호출자 소유의 북마크 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 북마크가 없거나 다른 계정 소유인 경우
    pub async fn delete_by_id(&self, account_id: i64, bookmark_id: i64) -> AppResult<()> {
        let deleted = self.bookmarks.delete(bookmark_id, account_id).await?;

        if !deleted {
            return Err(AppError::NotFound("bookmark not found".to_string()));
        }

        log::info!("북마크 삭제 완료: id={}, 계정={}", bookmark_id, account_id);

        Ok(())
    }
}

// MONGODB_URI가 가리키는 살아있는 MongoDB가 필요한 테스트.
// `cargo test -- --ignored`로 실행한다.
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::db::Database;

    async fn service() -> BookmarkService {
        let db = Arc::new(Database::new().await.expect("MongoDB 연결 필요"));
        let bookmarks = Arc::new(BookmarkRepository::new(db));
        bookmarks.create_indexes().await.expect("인덱스 생성 실패");

        BookmarkService::new(bookmarks)
    }

    // 실행 간 충돌을 피하기 위한 새 계정 ID 쌍
    fn fresh_account_ids() -> (i64, i64) {
        let base = Utc::now().timestamp_micros();
        (base, base + 1)
    }

    fn create_request(title: &str) -> CreateBookmarkRequest {
        CreateBookmarkRequest {
            title: title.to_string(),
            description: Some("Test description".to_string()),
            link: "https://test.com".to_string(),
        }
    }

    #[actix_web::test]
    #[ignore]
    async fn test_crud_round_trip() {
        let bookmarks = service().await;
        let (owner, _) = fresh_account_ids();

        // 생성
        let created = bookmarks
            .create(owner, create_request("Test bookmark"))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.user_id, owner);

        // 목록과 단건 조회
        let listed = bookmarks.list(owner).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let fetched = bookmarks.get_by_id(owner, created.id).await.unwrap();
        assert_eq!(fetched.title, "Test bookmark");

        // 부분 수정: 제목만 변경, 나머지는 유지
        let edited = bookmarks
            .edit_by_id(
                owner,
                created.id,
                EditBookmarkRequest {
                    title: Some("Edited title".to_string()),
                    description: None,
                    link: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.title, "Edited title");
        assert_eq!(edited.link, "https://test.com");
        assert_eq!(edited.description.as_deref(), Some("Test description"));

        // 삭제 후에는 조회 불가
        bookmarks.delete_by_id(owner, created.id).await.unwrap();

        let missing = bookmarks.get_by_id(owner, created.id).await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));

        let double_delete = bookmarks.delete_by_id(owner, created.id).await.unwrap_err();
        assert!(matches!(double_delete, AppError::NotFound(_)));

        assert!(bookmarks.list(owner).await.unwrap().is_empty());
    }

    #[actix_web::test]
    #[ignore]
    async fn test_cross_account_access_is_not_found() {
        let bookmarks = service().await;
        let (owner, stranger) = fresh_account_ids();

        let created = bookmarks
            .create(owner, create_request("Owner bookmark"))
            .await
            .unwrap();

        // 다른 계정의 조회/수정/삭제는 모두 404와 동일한 NotFound
        let get = bookmarks.get_by_id(stranger, created.id).await.unwrap_err();
        assert!(matches!(get, AppError::NotFound(_)));

        let edit = bookmarks
            .edit_by_id(
                stranger,
                created.id,
                EditBookmarkRequest {
                    title: Some("Hijacked".to_string()),
                    description: None,
                    link: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(edit, AppError::NotFound(_)));

        let delete = bookmarks.delete_by_id(stranger, created.id).await.unwrap_err();
        assert!(matches!(delete, AppError::NotFound(_)));

        // 소유자에게는 변경 없이 그대로 남아 있다
        let intact = bookmarks.get_by_id(owner, created.id).await.unwrap();
        assert_eq!(intact.title, "Owner bookmark");

        // 다른 계정의 목록에도 나타나지 않는다
        assert!(bookmarks.list(stranger).await.unwrap().is_empty());
    }
}
