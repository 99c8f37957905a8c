//! # Authentication Configuration Module
//!
//! JWT 토큰 발급/검증에 필요한 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="15"
//! ```

use std::env;

/// JWT 토큰 설정을 관리하는 구조체
///
/// 액세스 토큰의 서명 키와 만료 시간을 환경 변수에서 읽어옵니다.
/// 리프레시 토큰은 이 서비스의 범위에 포함되지 않습니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 최소 256비트의 암호학적으로 안전한 랜덤 키를 사용해야 합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 분 단위로 반환합니다.
    ///
    /// 리프레시 토큰이 없는 설계이므로 만료된 토큰은 재로그인으로만 갱신됩니다.
    ///
    /// # 기본값
    ///
    /// 15분
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_MINUTES="15"
    /// ```
    pub fn expiration_minutes() -> i64 {
        env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15)
    }
}
