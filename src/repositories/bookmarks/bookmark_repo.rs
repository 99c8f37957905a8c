//! # 북마크 리포지토리 구현
//!
//! 북마크 엔티티의 데이터 액세스 계층입니다.
//!
//! ## 소유권 스코핑
//!
//! 단건 조회/수정/삭제 쿼리는 모두 `_id`와 `user_id` 두 필드를 동시에
//! 필터링합니다. 다른 계정 소유의 북마크는 쿼리 결과에 나타나지 않으므로
//! 상위 계층에서는 "존재하지 않음"과 구분할 수 없습니다.

use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use std::sync::Arc;

use crate::db::Database;
use crate::domain::entities::bookmarks::Bookmark;
use crate::errors::{AppError, AppResult};

/// 북마크 데이터 액세스 리포지토리
pub struct BookmarkRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl BookmarkRepository {
    const COLLECTION: &'static str = "bookmarks";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Bookmark> {
        self.db.get_database().collection(Self::COLLECTION)
    }

    /// 특정 계정의 모든 북마크 조회 (생성 순서)
    pub async fn find_all_by_user(&self, user_id: i64) -> AppResult<Vec<Bookmark>> {
        let cursor = self.collection()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID + 소유 계정으로 단건 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(None)` - 북마크가 없거나 다른 계정 소유인 경우 (구분 불가)
    pub async fn find_by_id_and_user(&self, id: i64, user_id: i64) -> AppResult<Option<Bookmark>> {
        self.collection()
            .find_one(doc! { "_id": id, "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 북마크 생성
    ///
    /// 시퀀스에서 숫자 ID를 발급받아 저장합니다.
    pub async fn create(&self, mut bookmark: Bookmark) -> AppResult<Bookmark> {
        bookmark.id = self.db.next_sequence(Self::COLLECTION).await?;

        self.collection()
            .insert_one(&bookmark)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(bookmark)
    }

    /// 북마크 부분 업데이트
    ///
    /// `_id`와 `user_id`를 동시에 필터링하며, 일치하는 문서가 없으면
    /// (존재하지 않거나 소유자가 다르면) `Ok(None)`을 반환합니다.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        mut update_doc: Document,
    ) -> AppResult<Option<Bookmark>> {
        update_doc.insert("updated_at", Utc::now().to_rfc3339());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id, "user_id": user_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 북마크 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 북마크가 없거나 다른 계정 소유
    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id, "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// * `user_id` - 계정별 목록 조회 최적화
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();

        self.collection()
            .create_indexes([user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
