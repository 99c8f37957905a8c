//! 리포지토리 모듈
//!
//! 모든 MongoDB 접근은 이 계층을 통해서만 이루어집니다.
//! 드라이버 에러는 여기서 [`crate::errors::AppError`]로 번역되며,
//! 서비스 계층은 스토리지 엔진의 에러 코드를 절대 직접 검사하지 않습니다.

pub mod bookmarks;
pub mod users;

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 드라이버 에러가 유니크 인덱스 위반인지 판별합니다.
///
/// insert 경로는 `WriteFailure`로, update 경로는 `CommandError`로
/// 동일한 위반이 보고되므로 둘 다 확인합니다.
pub(crate) fn is_duplicate_key_error(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
