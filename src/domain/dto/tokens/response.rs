//! 토큰 응답 DTO

use serde::{Deserialize, Serialize};

/// 로그인/회원가입 성공 응답
///
/// 액세스 토큰 하나만 발급합니다. 리프레시 토큰은 이 서비스의 범위 밖입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT 액세스 토큰
    pub access_token: String,
}

impl TokenResponse {
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }
}
