//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하며, 이메일 유니크 제약은 인덱스로 보장합니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다.
//! 이메일 유니크 인덱스 위반은 이 계층에서 `AppError::DuplicateEmail`로
//! 번역되어 서비스 계층이 드라이버 에러 코드를 볼 일이 없도록 합니다.

use chrono::Utc;
use mongodb::bson::{Document, doc};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use std::sync::Arc;

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::is_duplicate_key_error;

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection(Self::COLLECTION)
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 시퀀스에서 숫자 ID를 발급받아 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::DuplicateEmail)` - 이메일 유니크 인덱스 위반
    /// * `Err(AppError::DatabaseError)` - 기타 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        user.id = self.db.next_sequence(Self::COLLECTION).await?;

        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::DuplicateEmail
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 원자적으로 변경하고,
    /// 갱신된 최신 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::DuplicateEmail)` - 이메일 변경이 유니크 인덱스와 충돌
    pub async fn update(&self, id: i64, mut update_doc: Document) -> AppResult<Option<User>> {
        update_doc.insert("updated_at", Utc::now().to_rfc3339());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::DuplicateEmail
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// * `email` - UNIQUE. 중복 가입 방지와 로그인 조회 최적화
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
