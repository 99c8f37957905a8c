//! 서버 설정 관리 모듈
//!
//! HTTP 서버 바인딩 관련 설정을 관리합니다.
//! MongoDB 연결 설정은 [`crate::db::Database`]가 직접 환경 변수에서 읽습니다.

use std::env;

/// HTTP 서버 설정을 관리하는 구조체
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `127.0.0.1`
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 8080. 파싱에 실패하면 경고 로그를 남기고 기본값을 사용합니다.
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or_else(|e| {
                log::warn!("PORT 파싱 실패: {}. 기본값 8080 사용", e);
                8080
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        // 환경 변수가 없을 때의 기본값
        unsafe { env::remove_var("PORT") };
        assert_eq!(ServerConfig::port(), 8080);
    }

    #[test]
    fn test_default_host() {
        unsafe { env::remove_var("HOST") };
        assert_eq!(ServerConfig::host(), "127.0.0.1");
    }
}
