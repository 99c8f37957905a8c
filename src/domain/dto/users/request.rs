//! 사용자 관련 요청 DTO
//!
//! 회원가입/로그인과 프로필 수정 요청의 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입/로그인 공통 요청 DTO
///
/// 두 엔드포인트 모두 이메일과 비밀번호만을 받으므로 하나의 타입을 공유합니다.
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "valid email address is required"))]
    pub email: String,

    /// 계정 비밀번호 (빈 문자열 불가)
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
///
/// 제공된 필드만 갱신됩니다. 모든 필드가 생략된 요청도 유효합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    /// 변경할 이메일 주소 (유니크 제약은 저장소 인덱스가 보장)
    #[validate(email(message = "valid email address is required"))]
    pub email: Option<String>,

    /// 변경할 이름
    pub first_name: Option<String>,

    /// 변경할 성
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_rejected() {
        let request = AuthRequest {
            email: "".to_string(),
            password: "123456".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        let request = AuthRequest {
            email: "test@test.com".to_string(),
            password: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_both_empty_rejected() {
        let request = AuthRequest {
            email: "".to_string(),
            password: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_credentials_accepted() {
        let request = AuthRequest {
            email: "test@test.com".to_string(),
            password: "123456".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let request = AuthRequest {
            email: "not-an-email".to_string(),
            password: "123456".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_edit_request_optional_fields() {
        let request = EditUserRequest {
            email: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_edit_request_invalid_email_rejected() {
        let request = EditUserRequest {
            email: Some("broken".to_string()),
            first_name: None,
            last_name: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_edit_request_camel_case_keys() {
        let request: EditUserRequest =
            serde_json::from_str(r#"{"email":"test@test.com","firstName":"Test"}"#).unwrap();

        assert_eq!(request.email.as_deref(), Some("test@test.com"));
        assert_eq!(request.first_name.as_deref(), Some("Test"));
        assert!(request.last_name.is_none());
    }
}
