//! 북마크 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.
//!
//! 의존성은 싱글톤이나 레지스트리 없이 여기서 명시적으로 조립됩니다.
//! 각 서비스는 생성자를 통해 필요한 협력자를 전달받고,
//! `web::Data`로 핸들러에 공유됩니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use bookmark_service_backend::config::ServerConfig;
use bookmark_service_backend::db::Database;
use bookmark_service_backend::repositories::bookmarks::BookmarkRepository;
use bookmark_service_backend::repositories::users::UserRepository;
use bookmark_service_backend::routes::configure_all_routes;
use bookmark_service_backend::services::auth::{AuthService, PasswordService, TokenService};
use bookmark_service_backend::services::bookmarks::BookmarkService;
use bookmark_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 북마크 서비스 시작중...");

    // 데이터베이스 초기화
    let database = initialize_database().await;

    // 의존성 조립: 리포지토리 → 서비스
    let user_repo = Arc::new(UserRepository::new(database.clone()));
    let bookmark_repo = Arc::new(BookmarkRepository::new(database.clone()));

    let token_service = Arc::new(TokenService::from_env());
    let password_service = Arc::new(PasswordService::new());

    let auth_service = web::Data::new(AuthService::new(
        user_repo.clone(),
        password_service,
        token_service.clone(),
    ));
    let user_service = web::Data::new(UserService::new(user_repo));
    let bookmark_service = web::Data::new(BookmarkService::new(bookmark_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(auth_service, user_service, bookmark_service, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    auth_service: web::Data<AuthService>,
    user_service: web::Data<UserService>,
    bookmark_service: web::Data<BookmarkService>,
    token_service: Arc<TokenService>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();
        let token_service = token_service.clone();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 공유 서비스 등록
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .app_data(bookmark_service.clone())
            // 라우트 설정
            .configure(move |cfg| configure_all_routes(cfg, token_service))
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화하고 인덱스를 보장합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
/// * 인덱스 생성 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패"),
    );

    info!("✅ MongoDB 연결 성공");

    // 이메일 고유성 인덱스, 북마크 소유자 인덱스 보장
    UserRepository::new(database.clone())
        .create_indexes()
        .await
        .expect("users 인덱스 생성 실패");
    BookmarkRepository::new(database.clone())
        .create_indexes()
        .await
        .expect("bookmarks 인덱스 생성 실패");

    info!("✅ 인덱스 생성 완료");

    database
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
