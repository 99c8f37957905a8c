//! 데이터 전송 객체 (DTO) 모듈
//!
//! HTTP 요청/응답 경계에서 사용하는 구조체들을 정의합니다.
//! 요청 DTO는 `validator` 파생으로 입력 검증을, 응답 DTO는 민감 정보
//! (비밀번호 해시)를 제외한 안전한 직렬화를 담당합니다.
//! 와이어 포맷은 camelCase, 저장 포맷은 snake_case입니다.

pub mod bookmarks;
pub mod tokens;
pub mod users;
