//! 비밀번호 해싱 서비스 구현
//!
//! Argon2id 기반의 단방향 해싱과 검증을 제공합니다.
//!
//! ## 보안 설계
//!
//! - **Argon2id**: 메모리 하드 알고리즘으로 GPU/ASIC 무차별 대입 공격에 저항
//! - **호출별 랜덤 솔트**: 같은 평문도 매번 다른 해시를 생성 (레인보우 테이블 방지)
//! - **PHC 형식 저장**: 파라미터와 솔트가 해시 문자열에 포함되어 자체 검증 가능
//!
//! 해싱은 의도적으로 느린 CPU 바운드 작업이므로 비동기 경로에서는
//! `web::block`으로 블로킹 스레드 풀에 위임하여 다른 요청을 막지 않습니다.

use actix_web::web;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::errors::{AppError, AppResult};

/// 비밀번호 해싱/검증 서비스
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// 블로킹 스레드 풀에서 실행되므로 async 워커를 점유하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해싱 실패 (정상 입력에서는 발생하지 않음)
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let plaintext = plaintext.to_owned();

        web::block(move || hash_blocking(&plaintext))
            .await
            .map_err(|e| AppError::InternalError(format!("hashing task failed: {}", e)))?
    }

    /// 평문 비밀번호를 저장된 해시와 비교합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 일치
    /// * `Ok(false)` - 불일치 (잘못된 비밀번호는 에러가 아님)
    /// * `Err(AppError::InternalError)` - 저장된 해시가 PHC 형식이 아님 (프로그래밍 오류)
    pub async fn verify(&self, hash: &str, plaintext: &str) -> AppResult<bool> {
        let hash = hash.to_owned();
        let plaintext = plaintext.to_owned();

        web::block(move || verify_blocking(&hash, &plaintext))
            .await
            .map_err(|e| AppError::InternalError(format!("verification task failed: {}", e)))?
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

/// Argon2id 해싱 (동기)
fn hash_blocking(plaintext: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {}", e)))
}

/// Argon2id 검증 (동기)
fn verify_blocking(hash: &str, plaintext: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::InternalError(format!("stored password hash is malformed: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_blocking("123456").unwrap();

        assert!(verify_blocking(&hash, "123456").unwrap());
        assert!(!verify_blocking(&hash, "654321").unwrap());
    }

    #[test]
    fn test_equal_plaintexts_produce_different_hashes() {
        // 호출별 랜덤 솔트 보장
        let first = hash_blocking("123456").unwrap();
        let second = hash_blocking("123456").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_is_phc_format() {
        let hash = hash_blocking("123456").unwrap();

        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_hash_is_error_not_false() {
        let result = verify_blocking("not-a-phc-string", "123456");

        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_async_wrappers() {
        let service = PasswordService::new();

        let hash = service.hash("123456").await.unwrap();
        assert!(service.verify(&hash, "123456").await.unwrap());
        assert!(!service.verify(&hash, "wrong").await.unwrap());
    }
}
