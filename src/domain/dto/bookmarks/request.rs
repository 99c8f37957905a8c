//! 북마크 관련 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 북마크 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    /// 제목 (필수)
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    /// 설명 (선택)
    pub description: Option<String>,

    /// 링크 (필수, URL 형식 검증은 하지 않음)
    #[validate(length(min = 1, message = "link must not be empty"))]
    pub link: String,
}

/// 북마크 수정 요청 DTO
///
/// 제공된 필드만 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditBookmarkRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "link must not be empty"))]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_rejected() {
        let request = CreateBookmarkRequest {
            title: "".to_string(),
            description: None,
            link: "https://test.com".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_link_rejected() {
        let request = CreateBookmarkRequest {
            title: "Test bookmark".to_string(),
            description: None,
            link: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_link_not_validated_as_url() {
        // 링크는 URL 형식을 강제하지 않는다
        let request = CreateBookmarkRequest {
            title: "Test bookmark".to_string(),
            description: Some("Test description".to_string()),
            link: "not a url".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_edit_with_no_fields_is_valid() {
        let request = EditBookmarkRequest {
            title: None,
            description: None,
            link: None,
        };

        assert!(request.validate().is_ok());
    }
}
