//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 상태 없는 인증을 제공합니다.
//! 액세스 토큰의 생성과 검증을 담당하며, 리프레시 토큰이나
//! 서버 측 무효화 목록은 존재하지 않습니다. 유출된 토큰은
//! 자연 만료 시점까지 유효합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 서명 키와 만료 시간은 생성 시점에
/// 주입되며 이후 변하지 않습니다.
pub struct TokenService {
    secret: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(secret: String, expiration_minutes: i64) -> Self {
        Self {
            secret,
            expiration_minutes,
        }
    }

    /// 환경 변수 설정으로부터 서비스를 구성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_minutes())
    }

    /// 계정을 위한 JWT 액세스 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `account_id` - 토큰 주체가 될 계정 ID
    /// * `email` - 계정 이메일
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue(&self, account_id: i64, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.expiration_minutes);

        let claims = TokenClaims {
            sub: account_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::InvalidSignature` - 서명 불일치
    /// * `AppError::MalformedToken` - 파싱할 수 없는 토큰
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::InvalidSignature,
                _ => AppError::MalformedToken,
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthenticated` - "Bearer " 접두사가 없는 헤더
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthenticated)
    }
}
