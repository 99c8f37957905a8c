//! 북마크 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::bookmarks::Bookmark;

/// 북마크 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        let Bookmark {
            id,
            user_id,
            title,
            description,
            link,
            created_at,
            updated_at,
        } = bookmark;

        Self {
            id,
            user_id,
            title,
            description,
            link,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_round_trip_fields() {
        let bookmark = Bookmark::new(
            3,
            "Test bookmark".to_string(),
            Some("Test description".to_string()),
            "https://test.com".to_string(),
        );

        let response = BookmarkResponse::from(bookmark.clone());

        assert_eq!(response.title, bookmark.title);
        assert_eq!(response.description, bookmark.description);
        assert_eq!(response.link, bookmark.link);
        assert_eq!(response.user_id, 3);
    }
}
