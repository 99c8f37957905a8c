use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

/// JWT 토큰에서 추출된 호출자 신원
///
/// 미들웨어가 요청당 한 번 토큰을 검증한 뒤 request extensions에 저장하며,
/// 핸들러는 이 추출자로 재검증 없이 신원을 읽습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 계정 고유 ID
    pub account_id: i64,

    /// 계정 이메일
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "Authentication required",
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
///
/// 익명 접근을 허용하는 라우트에서 사용합니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_identity_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            account_id: 42,
            email: "test@test.com".to_string(),
        });

        let user = AuthenticatedUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(user.account_id, 42);
        assert_eq!(user.email, "test@test.com");
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::from_request(&req, &mut Payload::None).await;

        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_optional_user_allows_anonymous() {
        let req = TestRequest::default().to_http_request();

        let OptionalUser(user) = OptionalUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert!(user.is_none());
    }
}
