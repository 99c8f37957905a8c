//! 회원가입/로그인 오케스트레이션 서비스
//!
//! 자격 증명을 다루는 유일한 두 진입점(signup/signin)을 구현합니다.
//! 다른 모든 라우트는 여기서 발급된 토큰을 신뢰하며 자격 증명을 재검사하지 않습니다.
//!
//! ## 보안 설계
//!
//! - **계정 열거 방지**: 존재하지 않는 이메일과 잘못된 비밀번호는 동일한
//!   `CredentialError`로 응답합니다.
//! - **중복 가입**: 이메일 유니크 인덱스 위반은 어떤 필드가 충돌했는지
//!   노출하지 않는 일반적인 `DuplicateEmail`(403)로 응답합니다.
//! - **방어적 검증**: 빈 입력은 핸들러의 validator가 먼저 거르지만,
//!   서비스도 자체적으로 거부합니다.

use std::sync::Arc;

use crate::domain::dto::tokens::TokenResponse;
use crate::domain::dto::users::AuthRequest;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::auth::{PasswordService, TokenService};
use crate::utils::string_utils::validate_required_string;

/// 회원가입/로그인 비즈니스 로직 서비스
///
/// 자체 상태는 가지지 않으며, 프로세스 시작 시점에 주입된
/// 리포지토리와 해싱/토큰 서비스를 조합합니다.
pub struct AuthService {
    users: Arc<UserRepository>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<UserRepository>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// 회원가입
    ///
    /// 비밀번호를 해싱하고 계정을 생성한 뒤 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 이메일/비밀번호
    /// * `AppError::DuplicateEmail` - 이미 등록된 이메일
    pub async fn signup(&self, request: AuthRequest) -> AppResult<TokenResponse> {
        let email = validate_required_string(&request.email, "email")?;
        let password = validate_required_string(&request.password, "password")?;

        let password_hash = self.passwords.hash(&password).await?;

        let user = self.users.create(User::new(email, password_hash)).await?;

        log::info!("신규 계정 생성 완료: id={}", user.id);

        let token = self.tokens.issue(user.id, &user.email)?;
        Ok(TokenResponse::new(token))
    }

    /// 로그인
    ///
    /// 이메일로 계정을 조회하고 비밀번호를 검증한 뒤 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 이메일/비밀번호
    /// * `AppError::CredentialError` - 계정 없음 또는 비밀번호 불일치 (구분 없음)
    pub async fn signin(&self, request: AuthRequest) -> AppResult<TokenResponse> {
        let email = validate_required_string(&request.email, "email")?;
        let password = validate_required_string(&request.password, "password")?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::CredentialError)?;

        let is_valid = self.passwords.verify(&user.password_hash, &password).await?;
        if !is_valid {
            log::warn!("로그인 실패: id={}", user.id);
            return Err(AppError::CredentialError);
        }

        let token = self.tokens.issue(user.id, &user.email)?;
        Ok(TokenResponse::new(token))
    }
}
