//! Bookmark Entity Implementation
//!
//! 계정 소유의 북마크 엔티티입니다. 모든 조회/수정/삭제는
//! `_id`와 `user_id` 두 필드로 동시에 필터링되어야 합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 북마크 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    /// 북마크 ID (시퀀스에서 발급되는 양의 정수)
    #[serde(rename = "_id")]
    pub id: i64,
    /// 소유 계정 ID
    pub user_id: i64,
    /// 제목 (필수)
    pub title: String,
    /// 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 링크 (필수, URL 형식 검증은 하지 않음)
    pub link: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// 새 북마크 생성
    ///
    /// ID는 0으로 초기화되며 리포지토리가 저장 시점에 시퀀스에서 할당합니다.
    pub fn new(user_id: i64, title: String, description: Option<String>, link: String) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            user_id,
            title,
            description,
            link,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bookmark_owner() {
        let bookmark = Bookmark::new(
            7,
            "Test bookmark".to_string(),
            Some("Test description".to_string()),
            "https://test.com".to_string(),
        );

        assert_eq!(bookmark.id, 0);
        assert_eq!(bookmark.user_id, 7);
        assert_eq!(bookmark.link, "https://test.com");
    }
}
