//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 기반 로컬 인증만을 지원하는 단순한 계정 모델입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 계정을 표현하는 핵심 도메인 엔티티입니다.
/// `password_hash`는 저장소에만 존재하며 응답 DTO로는 절대 노출되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 계정 ID (시퀀스에서 발급되는 양의 정수)
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 이메일 (unique, 대소문자 구분)
    pub email: String,
    /// Argon2id 해시 문자열 (PHC 형식)
    pub password_hash: String,
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// 성
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID는 0으로 초기화되며 리포지토리가 저장 시점에 시퀀스에서 할당합니다.
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            email,
            password_hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("test@test.com".to_string(), "$argon2id$...".to_string());

        assert_eq!(user.id, 0);
        assert_eq!(user.email, "test@test.com");
        assert!(user.first_name.is_none());
        assert!(user.last_name.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }
}
