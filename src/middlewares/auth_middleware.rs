//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 호출자 신원을 추출합니다.
//! 검증은 요청당 최대 한 번만 수행되며, 이후의 핸들러/추출자는
//! request extensions에 저장된 결과를 재사용합니다.

use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 토큰 검증기는 프로세스 시작 시 명시적으로 주입됩니다.
pub struct AuthMiddleware {
    /// 토큰 검증기
    tokens: Arc<TokenService>,
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(tokens: Arc<TokenService>, mode: AuthMode) -> Self {
        Self { tokens, mode }
    }

    /// 필수 인증 미들웨어 생성
    ///
    /// 유효한 토큰이 없으면 핸들러 실행 전에 401로 거부합니다.
    pub fn required(tokens: Arc<TokenService>) -> Self {
        Self::new(tokens, AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    ///
    /// 토큰이 없거나 유효하지 않아도 익명으로 진행합니다.
    pub fn optional(tokens: Arc<TokenService>) -> Self {
        Self::new(tokens, AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header;
    use actix_web::{App, HttpResponse, test, web};

    use crate::domain::auth::{AuthenticatedUser, OptionalUser};

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret".to_string(), 15))
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    async fn whoami_optional(OptionalUser(user): OptionalUser) -> HttpResponse {
        match user {
            Some(user) => HttpResponse::Ok().json(user),
            None => HttpResponse::Ok().json(serde_json::json!({ "anonymous": true })),
        }
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_token() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(token_service()))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_tampered_token() {
        let tokens = token_service();
        let other = TokenService::new("another-secret".to_string(), 15);
        let token = other.issue(1, "test@test.com").unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(tokens))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_mode_passes_identity_to_handler() {
        let tokens = token_service();
        let token = tokens.issue(42, "test@test.com").unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(tokens))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let user: AuthenticatedUser = test::call_and_read_body_json(&app, req).await;

        assert_eq!(user.account_id, 42);
        assert_eq!(user.email, "test@test.com");
    }

    #[actix_web::test]
    async fn test_optional_mode_allows_anonymous() {
        let app = test::init_service(
            App::new().service(
                web::scope("/open")
                    .wrap(AuthMiddleware::optional(token_service()))
                    .route("", web::get().to(whoami_optional)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/open").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
