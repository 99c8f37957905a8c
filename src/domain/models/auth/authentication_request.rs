//! 인증 모드 정의

/// 라우트별 인증 요구 수준
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 핸들러 실행 전에 401로 거부
    Required,
    /// 토큰이 없거나 유효하지 않아도 익명으로 진행
    Optional,
}
