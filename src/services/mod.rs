//! 비즈니스 로직 서비스 모듈
//!
//! 핸들러와 리포지토리 사이의 비즈니스 로직 계층입니다.
//! 모든 서비스는 프로세스 시작 시점에 명시적인 생성자 합성으로 한 번 조립되어
//! `web::Data`로 공유됩니다. 런타임 서비스 로케이터는 사용하지 않습니다.

pub mod auth;
pub mod bookmarks;
pub mod users;
