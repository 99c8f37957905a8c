//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::{AuthMode, AuthenticatedUser};
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub tokens: Arc<TokenService>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let tokens = self.tokens.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            // 토큰 검증은 요청당 여기서 최대 한 번만 수행된다
            let auth_result = extract_identity_from_request(&req, &tokens);

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패: 핸들러 실행 전에 거부
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    // 하위 원인과 무관하게 동일한 응답
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "Authentication required"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                // 인증 성공: 신원을 Request Extensions에 저장
                (_, Ok(user)) => {
                    log::debug!("인증 성공: 계정 ID {}", user.account_id);
                    req.extensions_mut().insert(user);
                },
                // Optional 모드에서 인증 실패: 익명으로 진행
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 익명으로 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
fn extract_identity_from_request(
    req: &ServiceRequest,
    tokens: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    // Bearer 토큰 추출
    let token = tokens.extract_bearer_token(auth_header)?;

    // 토큰 검증 및 클레임 추출
    let claims = tokens.verify(token)?;

    Ok(AuthenticatedUser {
        account_id: claims.sub,
        email: claims.email,
    })
}
