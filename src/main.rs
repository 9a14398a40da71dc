//! OAuth 토큰 교환 서비스 메인 애플리케이션
//!
//! 환경 설정을 읽어 프로바이더 서비스를 초기화하고 Actix-web HTTP 서버를 구동합니다.

use std::io;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use oauth_exchange_service::config::{
    CorsConfig, Environment, GitHubOAuthConfig, GoogleOAuthConfig, HttpClientConfig, ServerConfig,
};
use oauth_exchange_service::routes::{configure_all_routes, ROUTE_TABLE};
use oauth_exchange_service::services::auth::{GitHubExchangeService, GoogleExchangeService};
use oauth_exchange_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 OAuth 토큰 교환 서비스 시작중...");

    let server_config = ServerConfig::from_env().map_err(io::Error::other)?;
    let cors_config = CorsConfig::from_env();
    let (github, google) = initialize_services()?;

    info!("✅ 프로바이더 서비스 초기화 완료");

    start_http_server(server_config, cors_config, github, google).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함하며,
/// 프로바이더 서비스는 `web::Data`로 모든 워커가 공유합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    server_config: ServerConfig,
    cors_config: CorsConfig,
    github: GitHubExchangeService,
    google: GoogleExchangeService,
) -> io::Result<()> {
    let bind_address = server_config.bind_address();

    let github = web::Data::new(github);
    let google = web::Data::new(google);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(github.clone())
            .app_data(google.clone())
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(server_config.workers);

    print_startup_summary(&bind_address, ROUTE_TABLE);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실패하지 않습니다. 이미 설정된 환경변수가 우선합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`에 따른 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=oauth_exchange_service::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));

    info!("Current environment: {:?}", environment);
}

/// 프로바이더 설정을 읽어 교환 서비스를 생성합니다
///
/// 필수 자격 증명이 빠져 있으면 서버를 시작하지 않습니다.
fn initialize_services() -> io::Result<(GitHubExchangeService, GoogleExchangeService)> {
    let http_config = HttpClientConfig::from_env().map_err(io::Error::other)?;

    let github_config = GitHubOAuthConfig::from_env().map_err(|e| {
        error!("GitHub OAuth 설정 로드 실패: {}", e);
        io::Error::other(e)
    })?;
    let google_config = GoogleOAuthConfig::from_env().map_err(|e| {
        error!("Google OAuth 설정 로드 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("GitHub client_id: {}", github_config.client_id);
    info!("Google client_id: {}", google_config.client_id);

    let github = GitHubExchangeService::new(github_config, &http_config).map_err(io::Error::other)?;
    let google = GoogleExchangeService::new(google_config, &http_config).map_err(io::Error::other)?;

    Ok((github, google))
}

/// CORS 설정을 구성합니다
///
/// 허용 오리진은 `CORS_ALLOWED_ORIGINS`(쉼표 구분)에서 읽습니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
