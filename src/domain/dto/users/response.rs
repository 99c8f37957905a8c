//! 사용자 응답 DTO
//!
//! 엔티티에서 비밀번호 해시를 제거한 안전한 응답 형태로 변환합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// `password_hash` 필드는 구조적으로 존재하지 않으므로 직렬화 실수로도
/// 노출될 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: 1,
            email: "test@test.com".to_string(),
            password_hash: "$argon2id$super-secret".to_string(),
            first_name: Some("Test".to_string()),
            last_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
        assert!(json.contains(r#""email":"test@test.com""#));
        assert!(json.contains(r#""firstName":"Test""#));
    }
}
