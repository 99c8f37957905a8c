//! # 사용자 프로필 서비스 구현
//!
//! 인증된 호출자 자신의 프로필 조회/수정만을 제공합니다.
//! "ID로 임의 사용자 조회" 같은 경로는 의도적으로 존재하지 않습니다.

use mongodb::bson::Document;
use std::sync::Arc;

use crate::domain::dto::users::{EditUserRequest, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::clean_optional_string;

/// 사용자 프로필 비즈니스 로직 서비스
pub struct UserService {
    users: Arc<UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// 현재 호출자 자신의 프로필 조회
    ///
    /// `account_id`는 미들웨어가 검증한 토큰에서 온 값입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰 발급 후 계정이 삭제된 경우
    pub async fn get_self(&self, account_id: i64) -> AppResult<UserResponse> {
        self.users
            .find_by_id(account_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("account not found".to_string()))
    }

    /// 현재 호출자 자신의 프로필 수정
    ///
    /// 제공된 필드만 갱신합니다. 이메일 변경의 유니크 제약은 저장소 인덱스가
    /// 보장하며, 위반 시 리포지토리가 `DuplicateEmail`로 번역합니다.
    pub async fn edit_self(
        &self,
        account_id: i64,
        request: EditUserRequest,
    ) -> AppResult<UserResponse> {
        let mut update_doc = Document::new();

        if let Some(email) = clean_optional_string(request.email) {
            update_doc.insert("email", email);
        }
        if let Some(first_name) = clean_optional_string(request.first_name) {
            update_doc.insert("first_name", first_name);
        }
        if let Some(last_name) = clean_optional_string(request.last_name) {
            update_doc.insert("last_name", last_name);
        }

        let updated = self
            .users
            .update(account_id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("account not found".to_string()))?;

        log::info!("프로필 수정 완료: id={}", account_id);

        Ok(UserResponse::from(updated))
    }
}
